// src/routes/auth.rs
use axum::{extract::Json, http::StatusCode, Extension};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{error::StoreError, models::user::User, state::AppState};

#[derive(Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), StoreError> {
    // self-registration never grants admin
    let user = app_state
        .users
        .register(&payload.username, &payload.password, false)
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<UserResponse>, StoreError> {
    let user = app_state
        .users
        .authenticate(&payload.username, &payload.password)
        .await?;
    Ok(Json(UserResponse { user }))
}
