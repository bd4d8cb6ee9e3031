// ABOUTME: Route module organization for the HTTP endpoints
// ABOUTME: Route definitions by domain with thin handlers that delegate to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Fridge contents and fridge-derived recipe routes
pub mod fridge;
/// Health check and root banner routes
pub mod health;
/// Recipe listing, search, lookup and creation routes
pub mod recipes;

/// Fridge route handlers
pub use fridge::FridgeRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
