// ABOUTME: Sample recipes for populating a fresh recipe store
// ABOUTME: Used by the server binary unless seeding is disabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::NewRecipe;

/// Recipes loaded into the store at startup.
///
/// Returned already normalized, ready for [`super::RecipeStore::with_recipes`].
#[must_use]
pub fn sample_recipes() -> Vec<NewRecipe> {
    vec![NewRecipe::new("Chicken with rice", ["chicken", "rice", "onion", "carrot"])
        .with_instructions("Fry the chicken, add the vegetables, then stew with the rice")
        .with_cooking_time(30)
        .with_calories(450)]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_sample_recipes_are_valid() {
        for recipe in sample_recipes() {
            let validated = recipe.clone().validate().unwrap();
            assert_eq!(validated, recipe);
        }
    }
}
