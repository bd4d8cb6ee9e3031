// ABOUTME: Tests for the assembled router: root banner, health and middleware headers
// ABOUTME: Verifies request id propagation and CORS handling on real responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_app, create_test_resources};
use fridge_recipes_server::{
    config::{CorsConfig, ServerConfig},
    resources::ServerResources,
    server::RecipeServer,
    store::RecipeStore,
};
use helpers::axum_test::AxumTestRequest;
use std::sync::Arc;

#[tokio::test]
async fn test_root_banner() {
    let app = create_test_app(&create_test_resources(vec![]));

    let body: serde_json::Value = AxumTestRequest::get("/")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["message"], "Food Planner API");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(&create_test_resources(vec![]));

    let body: serde_json::Value = AxumTestRequest::get("/health")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fridge-recipes-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = create_test_app(&create_test_resources(vec![]));

    let response = AxumTestRequest::get("/recipes").send(app).await;

    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_test_app(&create_test_resources(vec![]));

    let response = AxumTestRequest::get("/fridge")
        .header("x-request-id", "trace-me-42")
        .send(app)
        .await;

    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-me-42"));
}

#[tokio::test]
async fn test_request_id_present_on_error_responses() {
    let app = create_test_app(&create_test_resources(vec![]));

    let response = AxumTestRequest::get("/recipes/search?ingredients=")
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = create_test_app(&create_test_resources(vec![]));

    let response = AxumTestRequest::get("/recipes")
        .header("origin", "http://example.com")
        .send(app)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_restricted_origin_list() {
    let config = ServerConfig {
        cors: CorsConfig {
            allowed_origins: "http://localhost:3000".to_owned(),
        },
        ..ServerConfig::default()
    };
    let resources = Arc::new(ServerResources::new(Arc::new(config), RecipeStore::new()));

    let allowed = AxumTestRequest::get("/recipes")
        .header("origin", "http://localhost:3000")
        .send(RecipeServer::new(Arc::clone(&resources)).router())
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin").as_deref(),
        Some("http://localhost:3000")
    );

    let denied = AxumTestRequest::get("/recipes")
        .header("origin", "http://evil.example")
        .send(RecipeServer::new(resources).router())
        .await;
    assert!(denied.header("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app(&create_test_resources(vec![]));

    AxumTestRequest::get("/pantry")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
