// src/client/mod.rs
//! View logic for the browser-facing pages: recipe search and registration.
//! Rendering is left to whatever front end drives these types; they own
//! the state and the calls out to the APIs.
pub mod api;
pub mod register;
pub mod search;

pub use api::{ClientError, HttpRecipeApi, HttpRegistrar, RecipeApi, Registrar};
pub use register::{Navigation, RegisterForm, RegisterView};
pub use search::{RecipeCard, RecipeSearch, SearchForm};

/// Outcome of a user-initiated action, as reported back to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        ActionResult {
            success: true,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<String>) -> Self {
        ActionResult {
            success: false,
            errors,
        }
    }
}
