// src/routes/mod.rs
pub mod auth;
pub mod users;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router() -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/token", post(auth::login))
        .route("/users/:username", get(users::get_user))
        .route("/users/:username/recipes/:recipe_id", post(users::save_recipe))
}

/// Full application: API under `/api` with state, tracing and CORS layers.
pub fn app(app_state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", create_router())
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::services::{MemoryRepository, UserStore};

    fn test_app() -> (Router, MemoryRepository) {
        let repo = MemoryRepository::new();
        let state = Arc::new(AppState {
            users: UserStore::new(Arc::new(repo.clone()), 4),
        });
        (app(state), repo)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn register_returns_created_user_without_password() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            post_json("/api/auth/register", json!({"username": "alice", "password": "secret1"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"user": {"id": 1, "username": "alice", "isAdmin": false}}));
    }

    #[tokio::test]
    async fn duplicate_register_is_conflict() {
        let (app, repo) = test_app();
        let creds = json!({"username": "alice", "password": "secret1"});
        send(&app, post_json("/api/auth/register", creds.clone())).await;

        let (status, body) = send(&app, post_json("/api/auth/register", creds)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["message"], "That username already exists.");
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn token_checks_password() {
        let (app, _) = test_app();
        send(
            &app,
            post_json("/api/auth/register", json!({"username": "alice", "password": "secret1"})),
        )
        .await;

        let (status, body) = send(
            &app,
            post_json("/api/auth/token", json!({"username": "alice", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "alice");

        let (status, body) = send(
            &app,
            post_json("/api/auth/token", json!({"username": "alice", "password": "wrong"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn get_user_and_save_recipe() {
        let (app, repo) = test_app();
        send(
            &app,
            post_json("/api/auth/register", json!({"username": "alice", "password": "secret1"})),
        )
        .await;

        let req = Request::builder().uri("/api/users/alice").body(Body::empty()).unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"user": {"id": 1, "username": "alice", "isAdmin": false}}));

        let req = Request::builder()
            .method("POST")
            .uri("/api/users/alice/recipes/716429")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"save": {"id": 1}}));
        assert_eq!(repo.saves().await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_routes_are_not_found() {
        let (app, repo) = test_app();
        let req = Request::builder().uri("/api/users/ghost").body(Body::empty()).unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "No user: ghost");

        let req = Request::builder()
            .method("POST")
            .uri("/api/users/ghost/recipes/716429")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(repo.saves().await.is_empty());
    }
}
