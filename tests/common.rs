// ABOUTME: Common fixtures for integration tests
// ABOUTME: Builds routers over fresh resources with known recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use axum::Router;
use fridge_recipes_server::{
    config::ServerConfig,
    models::NewRecipe,
    resources::ServerResources,
    server::RecipeServer,
    store::RecipeStore,
};
use std::sync::Arc;

/// The recipe used throughout the examples: chicken, rice, onion, carrot
pub fn chicken_rice() -> NewRecipe {
    NewRecipe::new("Chicken Rice", ["chicken", "rice", "onion", "carrot"])
        .with_instructions("Fry the chicken, add vegetables, stew with rice")
        .with_cooking_time(30)
        .with_calories(450)
}

/// A second recipe sharing rice with [`chicken_rice`]
pub fn egg_fried_rice() -> NewRecipe {
    NewRecipe::new("Egg Fried Rice", ["egg", "rice", "soy sauce"])
        .with_instructions("Fry rice with egg and soy sauce")
        .with_cooking_time(15)
        .with_calories(380)
}

/// Shared resources holding the given recipes and an empty fridge
pub fn create_test_resources(recipes: Vec<NewRecipe>) -> Arc<ServerResources> {
    let store = RecipeStore::with_recipes(recipes).unwrap();
    Arc::new(ServerResources::new(Arc::new(ServerConfig::default()), store))
}

/// Full application router over the given resources
pub fn create_test_app(resources: &Arc<ServerResources>) -> Router {
    RecipeServer::new(Arc::clone(resources)).router()
}
