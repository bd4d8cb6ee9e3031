// ABOUTME: Main library entry point for the fridge recipes API
// ABOUTME: In-memory recipe and fridge stores with ingredient matching over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Fridge Recipes Server
//!
//! A small HTTP service that keeps a list of recipes and the contents of a
//! virtual fridge in memory, and answers two questions:
//!
//! - which recipes use all of these ingredients?
//! - which recipes can I make with what is in the fridge?
//!
//! ## Architecture
//!
//! - **Models**: typed recipe records, validated on construction
//! - **Store**: append-only recipe list and fridge product list
//! - **Intelligence**: the ingredient coverage predicate and both search modes
//! - **Services**: business logic returning response bodies or `AppError`
//! - **Routes**: thin axum handlers
//! - **Server**: router assembly, middleware and graceful shutdown
//!
//! State lives in [`resources::ServerResources`], built once by the binary
//! and shared with every handler. There are no globals.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fridge_recipes_server::config::ServerConfig;
//! use fridge_recipes_server::resources::ServerResources;
//! use fridge_recipes_server::server::RecipeServer;
//! use fridge_recipes_server::store::{sample_recipes, RecipeStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let recipes = RecipeStore::with_recipes(sample_recipes())?;
//!     let resources = Arc::new(ServerResources::new(config, recipes));
//!
//!     RecipeServer::new(resources).run().await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants, see [`fridge_core::constants`]
pub use fridge_core::constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Ingredient matching against query terms and fridge contents
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids, tracing spans)
pub mod middleware;

/// Recipe data models
pub mod models;

/// Shared server state
pub mod resources;

/// HTTP route handlers by domain
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Business logic behind the routes
pub mod services;

/// In-memory recipe and fridge stores
pub mod store;
