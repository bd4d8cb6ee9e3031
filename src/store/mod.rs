// ABOUTME: In-memory stores for recipes and fridge products
// ABOUTME: Process-lifetime state owned by ServerResources, no persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Stores
//!
//! Two plain in-memory collections. Neither store locks internally; the
//! composition root wraps each one in a `tokio::sync::RwLock` inside
//! [`crate::resources::ServerResources`].

/// Ordered fridge product list with append and clear
pub mod fridge;
/// Append-only recipe list with sequential ids
pub mod recipes;
/// Sample recipes loaded at startup
pub mod sample;

pub use fridge::FridgeStore;
pub use recipes::RecipeStore;
pub use sample::sample_recipes;
