// ABOUTME: Business logic behind the HTTP routes
// ABOUTME: Services lock the stores, call the matcher, and build response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer
//!
//! Route handlers stay thin and delegate here. Each service holds the shared
//! [`ServerResources`](crate::resources::ServerResources) handle.

/// Fridge contents and fridge-derived recipe search
pub mod fridge;
/// Recipe listing, lookup, search and creation
pub mod recipes;

pub use fridge::FridgeService;
pub use recipes::RecipeService;

use serde::{Deserialize, Serialize};

/// Plain confirmation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
