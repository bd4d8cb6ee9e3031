// ABOUTME: Data models for recipes and fridge contents
// ABOUTME: Re-exports Recipe, NewRecipe and the normalization helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Typed records for everything the service stores. Client payloads are
//! validated into these types on construction instead of being trusted as
//! loose JSON.
//!
//! - `Recipe`: a stored recipe with its assigned id
//! - `NewRecipe`: a recipe as submitted, before an id is assigned

/// Recipe records and the request model used to create them
pub mod recipe;

pub use recipe::{normalize, NewRecipe, Recipe};
