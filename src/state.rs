// src/state.rs
use crate::services::UserStore;

// Shared application state, handed to handlers as `Extension<Arc<AppState>>`
pub struct AppState {
    pub users: UserStore,
}
