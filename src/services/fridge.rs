// ABOUTME: Fridge business logic extracted from route handlers
// ABOUTME: Adds, lists and clears products and finds recipes the fridge can satisfy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::MessageResponse;
use crate::constants::messages;
use crate::errors::AppResult;
use crate::intelligence::recipes_from_fridge;
use crate::models::Recipe;
use crate::resources::ServerResources;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Current fridge contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeContentsResponse {
    /// Number of products, duplicates included
    pub total_products: usize,
    /// Whether the fridge is empty
    pub is_empty: bool,
    /// Products in insertion order
    pub products: Vec<String>,
}

/// Confirmation of an add, with a snapshot of the fridge afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeUpdatedResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Fridge contents after the add
    pub fridge: Vec<String>,
}

/// Recipes the fridge can satisfy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableRecipesResponse {
    /// Satisfiable recipes in store order
    pub available_recipes: Vec<Recipe>,
}

/// Fridge operations over the shared stores
pub struct FridgeService {
    resources: Arc<ServerResources>,
}

impl FridgeService {
    /// Create a service over the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Current contents
    pub async fn get_fridge(&self) -> FridgeContentsResponse {
        let fridge = self.resources.fridge.read().await;
        FridgeContentsResponse {
            total_products: fridge.len(),
            is_empty: fridge.is_empty(),
            products: fridge.list().to_vec(),
        }
    }

    /// Add a single product
    pub async fn add_product(&self, product: &str) -> FridgeUpdatedResponse {
        let mut fridge = self.resources.fridge.write().await;
        fridge.add_product(product);
        info!(fridge.size = fridge.len(), "Product added to fridge");

        FridgeUpdatedResponse {
            message: messages::PRODUCTS_ADDED.to_owned(),
            fridge: fridge.list().to_vec(),
        }
    }

    /// Add several products
    pub async fn add_products(&self, products: &[String]) -> FridgeUpdatedResponse {
        let mut fridge = self.resources.fridge.write().await;
        fridge.add_products(products);
        info!(
            fridge.added = products.len(),
            fridge.size = fridge.len(),
            "Products added to fridge"
        );

        FridgeUpdatedResponse {
            message: messages::PRODUCTS_ADDED.to_owned(),
            fridge: fridge.list().to_vec(),
        }
    }

    /// Empty the fridge
    pub async fn clear_fridge(&self) -> MessageResponse {
        self.resources.fridge.write().await.clear();
        info!("Fridge cleared");

        MessageResponse::new(messages::FRIDGE_CLEARED)
    }

    /// Recipes whose every ingredient is currently in the fridge
    ///
    /// # Errors
    ///
    /// Returns not found if the fridge is empty or nothing can be made
    pub async fn available_recipes(&self) -> AppResult<AvailableRecipesResponse> {
        let recipes = self.resources.recipes.read().await;
        let fridge = self.resources.fridge.read().await;

        let available = recipes_from_fridge(recipes.list_all(), fridge.list())?;

        Ok(AvailableRecipesResponse {
            available_recipes: available.into_iter().cloned().collect(),
        })
    }
}
