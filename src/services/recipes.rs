// ABOUTME: Recipe business logic extracted from route handlers
// ABOUTME: Lists, looks up, searches by ingredients, and adds recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::MessageResponse;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::intelligence::search_by_ingredients;
use crate::models::{NewRecipe, Recipe};
use crate::resources::ServerResources;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Every stored recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// Number of recipes
    pub total_recipes: usize,
    /// Whether the store is empty
    pub is_empty: bool,
    /// Recipes in insertion order
    pub recipes: Vec<Recipe>,
}

/// Result of an ingredient search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundRecipesResponse {
    /// Matching recipes in store order
    pub found_recipes: Vec<Recipe>,
}

/// Recipe operations over the shared store
pub struct RecipeService {
    resources: Arc<ServerResources>,
}

impl RecipeService {
    /// Create a service over the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// List all recipes
    pub async fn list_recipes(&self) -> RecipeListResponse {
        let store = self.resources.recipes.read().await;
        RecipeListResponse {
            total_recipes: store.len(),
            is_empty: store.is_empty(),
            recipes: store.list_all().to_vec(),
        }
    }

    /// Fetch one recipe
    ///
    /// # Errors
    ///
    /// Returns not found if no recipe has this id
    pub async fn get_recipe(&self, id: u32) -> AppResult<Recipe> {
        let store = self.resources.recipes.read().await;
        store
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))
    }

    /// Search recipes that use every ingredient in a comma-separated query
    ///
    /// # Errors
    ///
    /// Returns a client input error if the query is absent or empty, and not
    /// found if no recipe matches
    pub async fn search_recipes(&self, ingredients: Option<&str>) -> AppResult<FoundRecipesResponse> {
        let raw_query = ingredients.ok_or_else(|| AppError::missing_field("ingredients"))?;

        let store = self.resources.recipes.read().await;
        let found = search_by_ingredients(store.list_all(), raw_query)?;

        Ok(FoundRecipesResponse {
            found_recipes: found.into_iter().cloned().collect(),
        })
    }

    /// Validate and store a new recipe
    ///
    /// The assigned id is logged but not returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns a client input error if the recipe fails validation
    pub async fn add_recipe(&self, new_recipe: NewRecipe) -> AppResult<MessageResponse> {
        let mut store = self.resources.recipes.write().await;
        let id = store.add(new_recipe)?;
        let total = store.len();
        drop(store);

        info!(recipe.id = id, recipes.total = total, "Recipe added");

        Ok(MessageResponse::new(messages::RECIPE_ADDED))
    }
}
