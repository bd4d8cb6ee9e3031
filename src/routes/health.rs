// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the root banner and a liveness endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring

use crate::constants::{messages, service_names};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({ "message": messages::API_BANNER }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": service_names::FRIDGE_RECIPES_SERVER,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
    }
}
