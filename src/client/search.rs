// src/client/search.rs
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::client::api::RecipeApi;
use crate::client::ActionResult;
use crate::models::recipe::Recipe;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub search: String,
}

/// One rendered result, linking to the recipe's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub key: String,
    pub title: String,
    pub text: String,
    pub href: String,
}

/// State behind the recipe search page.
#[derive(Debug, Clone, Default)]
pub struct RecipeSearch {
    recipes: Vec<Recipe>,
}

impl RecipeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Runs a search and replaces the held results. On failure the
    /// previous results stay as they were.
    pub async fn find_recipes(&mut self, api: &dyn RecipeApi, form: &SearchForm) -> ActionResult {
        match api.find_recipes(form).await {
            Ok(recipes) => {
                self.recipes = recipes;
                ActionResult::ok()
            }
            Err(e) => {
                error!("Search failed: {}", e);
                ActionResult::failed(vec![e.to_string()])
            }
        }
    }

    /// Cards for the result list; empty when there is nothing to show.
    pub fn cards(&self) -> Vec<RecipeCard> {
        self.recipes
            .iter()
            .map(|recipe| RecipeCard {
                key: recipe.id.clone(),
                title: recipe.title.clone(),
                text: recipe.description.clone(),
                href: format!("/recipe/{}", recipe.id),
            })
            .collect()
    }
}
