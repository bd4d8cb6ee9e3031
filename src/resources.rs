// ABOUTME: Shared server state built by the composition root
// ABOUTME: Owns the configuration and both stores behind async read-write locks
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Server Resources
//!
//! Everything request handlers need, constructed once at startup and shared
//! as `Arc<ServerResources>` through axum's `State` extractor.

use crate::config::ServerConfig;
use crate::store::{FridgeStore, RecipeStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-lifetime state shared by all handlers
#[derive(Debug)]
pub struct ServerResources {
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe collection
    pub recipes: RwLock<RecipeStore>,
    /// Fridge contents
    pub fridge: RwLock<FridgeStore>,
}

impl ServerResources {
    /// Create resources with an empty fridge and the given recipes
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, recipes: RecipeStore) -> Self {
        Self {
            config,
            recipes: RwLock::new(recipes),
            fridge: RwLock::new(FridgeStore::new()),
        }
    }

    /// Resources with default configuration and empty stores
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Arc::new(ServerConfig::default()), RecipeStore::new())
    }
}
