// ABOUTME: Recipe matching logic against query terms and fridge contents
// ABOUTME: Pure functions over the stores, no state of their own
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Intelligence Module
//!
//! The only branching logic in the service: deciding which recipes a set of
//! ingredients can make. See [`matching`].

/// Ingredient coverage predicate and the two search modes
pub mod matching;

pub use matching::{covers, parse_query, recipes_from_fridge, search_by_ingredients};
