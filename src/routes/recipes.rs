// ABOUTME: Recipe route handlers for listing, searching, lookup and creation
// ABOUTME: Thin axum handlers delegating to RecipeService
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe routes
//!
//! - `GET /recipes` lists every recipe
//! - `GET /recipes/search?ingredients=a,b` finds recipes using all of `a`, `b`
//! - `GET /recipes/:id` fetches one recipe
//! - `POST /recipes` adds a recipe

use crate::{
    errors::AppError,
    models::{NewRecipe, Recipe},
    resources::ServerResources,
    services::{
        recipes::{FoundRecipesResponse, RecipeListResponse},
        MessageResponse, RecipeService,
    },
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the ingredient search
#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    ingredients: Option<String>,
}

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/recipes",
                get(Self::handle_list_recipes).post(Self::handle_add_recipe),
            )
            .route("/recipes/search", get(Self::handle_search_recipes))
            .route("/recipes/:id", get(Self::handle_get_recipe))
            .with_state(resources)
    }

    /// Handle list recipes
    async fn handle_list_recipes(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<RecipeListResponse> {
        Json(RecipeService::new(resources).list_recipes().await)
    }

    /// Handle search by ingredients
    async fn handle_search_recipes(
        State(resources): State<Arc<ServerResources>>,
        params: Result<Query<SearchQuery>, QueryRejection>,
    ) -> Result<Json<FoundRecipesResponse>, AppError> {
        let Query(params) = params.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let response = RecipeService::new(resources)
            .search_recipes(params.ingredients.as_deref())
            .await?;
        Ok(Json(response))
    }

    /// Handle get recipe by id
    async fn handle_get_recipe(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<u32>, PathRejection>,
    ) -> Result<Json<Recipe>, AppError> {
        let Path(id) = id.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let recipe = RecipeService::new(resources).get_recipe(id).await?;
        Ok(Json(recipe))
    }

    /// Handle add recipe
    async fn handle_add_recipe(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<NewRecipe>, JsonRejection>,
    ) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
        let Json(new_recipe) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let response = RecipeService::new(resources).add_recipe(new_recipe).await?;
        Ok((StatusCode::CREATED, Json(response)))
    }
}
