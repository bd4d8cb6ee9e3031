// ABOUTME: Fridge route handlers for contents, adds, clear and satisfiable recipes
// ABOUTME: Thin axum handlers delegating to FridgeService
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fridge routes

use crate::{
    errors::AppError,
    resources::ServerResources,
    services::{
        fridge::{AvailableRecipesResponse, FridgeContentsResponse, FridgeUpdatedResponse},
        FridgeService, MessageResponse,
    },
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Body for a batch add
#[derive(Debug, Deserialize)]
pub struct AddProductsRequest {
    /// Product names, normalized on insert
    pub products: Vec<String>,
}

/// Body for a single add
#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    /// Product name, normalized on insert
    pub product: String,
}

/// Fridge routes
pub struct FridgeRoutes;

impl FridgeRoutes {
    /// Create all fridge routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/fridge",
                get(Self::handle_get_fridge)
                    .post(Self::handle_add_products)
                    .delete(Self::handle_clear_fridge),
            )
            .route("/fridge/product", post(Self::handle_add_product))
            .route("/fridge/recipes", get(Self::handle_available_recipes))
            .with_state(resources)
    }

    async fn handle_get_fridge(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<FridgeContentsResponse> {
        Json(FridgeService::new(resources).get_fridge().await)
    }

    async fn handle_add_products(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<AddProductsRequest>, JsonRejection>,
    ) -> Result<Json<FridgeUpdatedResponse>, AppError> {
        let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let response = FridgeService::new(resources)
            .add_products(&request.products)
            .await;
        Ok(Json(response))
    }

    async fn handle_add_product(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<AddProductRequest>, JsonRejection>,
    ) -> Result<Json<FridgeUpdatedResponse>, AppError> {
        let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let response = FridgeService::new(resources)
            .add_product(&request.product)
            .await;
        Ok(Json(response))
    }

    async fn handle_clear_fridge(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<MessageResponse> {
        Json(FridgeService::new(resources).clear_fridge().await)
    }

    async fn handle_available_recipes(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<AvailableRecipesResponse>, AppError> {
        let response = FridgeService::new(resources).available_recipes().await?;
        Ok(Json(response))
    }
}
