// src/models/recipe.rs
use serde::{Deserialize, Serialize};

/// Search result from the external recipe API. Held only in view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeList {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}
