// src/routes/users.rs
use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::StoreError,
    models::user::Save,
    routes::auth::UserResponse,
    state::AppState,
};

#[derive(Serialize, Deserialize)]
pub struct SaveResponse {
    pub save: Save,
}

pub async fn get_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, StoreError> {
    let user = app_state.users.get(&username).await?;
    Ok(Json(UserResponse { user }))
}

pub async fn save_recipe(
    Extension(app_state): Extension<Arc<AppState>>,
    Path((username, recipe_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<SaveResponse>), StoreError> {
    let save = app_state.users.save_recipe(&username, &recipe_id).await?;
    Ok((StatusCode::CREATED, Json(SaveResponse { save })))
}
