// ABOUTME: Recipe data models with normalized ingredient lists
// ABOUTME: Defines Recipe, the NewRecipe request model, and string normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Trim surrounding whitespace and lower-case.
///
/// Every ingredient and fridge product goes through this before it is stored
/// or compared, so matching is case- and whitespace-insensitive.
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Sequential 1-based identifier, never reused
    pub id: u32,
    /// Recipe name
    pub name: String,
    /// Normalized ingredient names, in the order they were given
    pub ingredients: Vec<String>,
    /// Cooking instructions
    pub instructions: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Calories per serving
    pub calories: u32,
}

impl Recipe {
    /// Build a stored recipe from a validated request and its assigned id
    #[must_use]
    pub fn from_new(id: u32, new_recipe: NewRecipe) -> Self {
        Self {
            id,
            name: new_recipe.name,
            ingredients: new_recipe.ingredients,
            instructions: new_recipe.instructions,
            cooking_time: new_recipe.cooking_time,
            calories: new_recipe.calories,
        }
    }
}

/// A recipe as submitted by a client, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Recipe name
    pub name: String,
    /// Ingredient names (normalized by [`NewRecipe::validate`])
    pub ingredients: Vec<String>,
    /// Cooking instructions
    #[serde(default)]
    pub instructions: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Calories per serving
    pub calories: u32,
}

impl NewRecipe {
    /// Create a request model; call [`NewRecipe::validate`] before storing it
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            instructions: String::new(),
            cooking_time: 0,
            calories: 0,
        }
    }

    /// Set instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set cooking time
    #[must_use]
    pub const fn with_cooking_time(mut self, mins: u32) -> Self {
        self.cooking_time = mins;
        self
    }

    /// Set calories
    #[must_use]
    pub const fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// Normalize and check the request.
    ///
    /// The name is trimmed and must not be blank. Ingredients are normalized
    /// and blank entries dropped; at least one must remain.
    ///
    /// # Errors
    ///
    /// Returns a client input error if the name is blank or no ingredient
    /// remains after normalization.
    pub fn validate(self) -> AppResult<Self> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }

        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|ingredient| normalize(ingredient))
            .filter(|ingredient| !ingredient.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "A recipe needs at least one non-empty ingredient",
            ));
        }

        Ok(Self {
            name,
            ingredients,
            instructions: self.instructions.trim().to_owned(),
            ..self
        })
    }
}
