// ABOUTME: Append-only recipe store assigning sequential 1-based ids
// ABOUTME: Supports add, list in insertion order, and lookup by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::AppResult;
use crate::models::{NewRecipe, Recipe};

/// Ordered collection of recipes.
///
/// Ids are `len + 1` at insertion time. There is no update or delete, so an
/// id is never reused.
#[derive(Debug, Default, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Create a store holding the given recipes, in order
    ///
    /// # Errors
    ///
    /// Returns the first validation error; no store is built in that case
    pub fn with_recipes(recipes: impl IntoIterator<Item = NewRecipe>) -> AppResult<Self> {
        let mut store = Self::new();
        for recipe in recipes {
            store.add(recipe)?;
        }
        Ok(store)
    }

    /// Validate a recipe, append it and return the id assigned to it.
    ///
    /// Ingredients are normalized by [`NewRecipe::validate`] before storage.
    /// Duplicate names are accepted.
    ///
    /// # Errors
    ///
    /// Returns a client input error if the recipe fails validation. The store
    /// is left unchanged and no id is consumed.
    pub fn add(&mut self, new_recipe: NewRecipe) -> AppResult<u32> {
        let new_recipe = new_recipe.validate()?;
        let id = self.next_id();
        self.recipes.push(Recipe::from_new(id, new_recipe));
        Ok(id)
    }

    /// All recipes in insertion order
    #[must_use]
    pub fn list_all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Find a recipe by id
    #[must_use]
    pub fn get_by_id(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Number of stored recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.recipes.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;
    use crate::intelligence::search_by_ingredients;

    fn recipe(name: &str) -> NewRecipe {
        NewRecipe::new(name, ["salt"])
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RecipeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = RecipeStore::new();

        assert_eq!(store.add(recipe("first")).unwrap(), 1);
        assert_eq!(store.add(recipe("second")).unwrap(), 2);
        assert_eq!(store.add(recipe("third")).unwrap(), 3);

        let ids: Vec<u32> = store.list_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_increases_len_by_one() {
        let mut store = RecipeStore::with_recipes([recipe("a"), recipe("b")]).unwrap();
        let before = store.len();

        let id = store.add(recipe("c")).unwrap();

        assert_eq!(store.len(), before + 1);
        assert_eq!(id as usize, before + 1);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut store = RecipeStore::new();
        store.add(recipe("Omelette")).unwrap();
        store.add(recipe("Omelette")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.list_all()[0].name, store.list_all()[1].name);
        assert_ne!(store.list_all()[0].id, store.list_all()[1].id);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = RecipeStore::with_recipes([recipe("z"), recipe("a"), recipe("m")]).unwrap();
        let names: Vec<&str> = store.list_all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_get_by_id() {
        let store = RecipeStore::with_recipes([recipe("a"), recipe("b")]).unwrap();

        assert_eq!(store.get_by_id(2).unwrap().name, "b");
        assert!(store.get_by_id(0).is_none());
        assert!(store.get_by_id(3).is_none());
    }

    #[test]
    fn test_add_stores_normalized_ingredients() {
        let mut store = RecipeStore::new();
        let id = store
            .add(NewRecipe::new("  Stew ", [" Chicken ", "ONION", " "]))
            .unwrap();

        let stored = store.get_by_id(id).unwrap();
        assert_eq!(stored.name, "Stew");
        assert_eq!(stored.ingredients, vec!["chicken", "onion"]);

        let found = search_by_ingredients(store.list_all(), "chicken").unwrap();
        assert_eq!(found[0].id, id);
    }

    #[test]
    fn test_add_rejects_invalid_recipe_without_consuming_id() {
        let mut store = RecipeStore::new();

        let error = store.add(NewRecipe::new("Air", ["  "])).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(store.is_empty());

        assert_eq!(store.add(recipe("next")).unwrap(), 1);
    }

    #[test]
    fn test_with_recipes_fails_on_invalid_entry() {
        let error = RecipeStore::with_recipes([recipe("ok"), NewRecipe::new(" ", ["salt"])])
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
    }
}
