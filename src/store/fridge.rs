// ABOUTME: Fridge product store holding normalized product names
// ABOUTME: Multiset semantics with append, batch append and clear-all
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::normalize;

/// The user's current products.
///
/// Duplicates are kept and insertion order is preserved for display. There is
/// no single-item removal; [`FridgeStore::clear`] is the only way to take
/// products out.
#[derive(Debug, Default, Clone)]
pub struct FridgeStore {
    products: Vec<String>,
}

impl FridgeStore {
    /// Create an empty fridge
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Normalize and append one product
    pub fn add_product(&mut self, name: &str) {
        self.products.push(normalize(name));
    }

    /// Normalize and append each product, in order
    pub fn add_products<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.products
            .extend(names.into_iter().map(|name| normalize(name.as_ref())));
    }

    /// Current contents in insertion order
    #[must_use]
    pub fn list(&self) -> &[String] {
        &self.products
    }

    /// Remove every product
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Number of products, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the fridge holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_product_normalizes() {
        let mut fridge = FridgeStore::new();
        fridge.add_product("  Milk ");
        fridge.add_product("EGGS");

        assert_eq!(fridge.list(), ["milk", "eggs"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut fridge = FridgeStore::new();
        fridge.add_products(["egg", "Egg", " egg"]);

        assert_eq!(fridge.len(), 3);
        assert!(fridge.list().iter().all(|p| p == "egg"));
    }

    #[test]
    fn test_add_products_preserves_order() {
        let mut fridge = FridgeStore::new();
        fridge.add_product("rice");
        fridge.add_products(vec!["Chicken".to_owned(), "Onion".to_owned()]);

        assert_eq!(fridge.list(), ["rice", "chicken", "onion"]);
    }

    #[test]
    fn test_clear_empties_fridge() {
        let mut fridge = FridgeStore::new();
        fridge.add_products(["a", "b"]);

        fridge.clear();

        assert!(fridge.is_empty());
        assert!(fridge.list().is_empty());
    }

    #[test]
    fn test_clear_on_empty_fridge_succeeds() {
        let mut fridge = FridgeStore::new();
        fridge.clear();
        assert_eq!(fridge.len(), 0);
    }
}
