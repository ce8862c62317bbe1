//! The user's product selection.
//!
//! An ordered, unique-by-id set of full product records. Insertion order is
//! preserved for display stability. The `SelectionStore` trait is the port
//! for persisting the selection; the file-backed implementation lives in
//! lustre-infra.

use lustre_types::catalog::{Product, RoutineProduct};
use lustre_types::error::StorageError;

/// The chosen subset of catalog products used to seed a routine request.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    products: Vec<Product>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from persisted records, dropping duplicate ids
    /// (first occurrence wins).
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut selection = Self::new();
        for product in products {
            selection.add(product);
        }
        selection
    }

    /// The selected products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether a product with this id is selected.
    pub fn contains(&self, id: u32) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Add a product. Returns false (and leaves the selection unchanged)
    /// when a product with the same id is already selected.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.products.push(product);
        true
    }

    /// Remove a product by id, returning it when present.
    pub fn remove(&mut self, id: u32) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Toggle a product: add it when absent, remove it when present.
    /// Returns true when the product is selected afterwards.
    pub fn toggle(&mut self, product: Product) -> bool {
        if self.remove(product.id).is_some() {
            false
        } else {
            self.products.push(product);
            true
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// The four-field subset sent with a routine request, in selection order.
    pub fn routine_products(&self) -> Vec<RoutineProduct> {
        self.products.iter().map(RoutineProduct::from).collect()
    }
}

/// Port for selection persistence.
///
/// A single key-value style blob: the whole selection is written on every
/// mutation and read back at startup. Missing or malformed data degrades to
/// an empty selection without signaling an error. Uses RPITIT; the
/// file-backed implementation lives in lustre-infra.
pub trait SelectionStore: Send + Sync {
    /// Load the persisted selection, or an empty one when nothing usable
    /// is stored.
    fn load(&self) -> impl std::future::Future<Output = Result<SelectionSet, StorageError>> + Send;

    /// Persist the full selection snapshot, replacing the previous one.
    fn save(
        &self,
        selection: &SelectionSet,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: "Brand".to_string(),
            category: "serum".to_string(),
            description: "A product.".to_string(),
            image: format!("img/{id}.png"),
        }
    }

    #[test]
    fn test_add_preserves_order_and_uniqueness() {
        let mut selection = SelectionSet::new();
        assert!(selection.add(product(2, "b")));
        assert!(selection.add(product(1, "a")));
        assert!(!selection.add(product(2, "b again")));

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.products()[0].id, 2);
        assert_eq!(selection.products()[1].id, 1);
    }

    #[test]
    fn test_remove() {
        let mut selection = SelectionSet::new();
        selection.add(product(1, "a"));
        selection.add(product(2, "b"));

        let removed = selection.remove(1).unwrap();
        assert_eq!(removed.name, "a");
        assert!(!selection.contains(1));
        assert!(selection.remove(1).is_none());
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(product(3, "c")));
        assert!(selection.contains(3));
        assert!(!selection.toggle(product(3, "c")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.add(product(1, "a"));
        selection.add(product(2, "b"));
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_from_products_drops_duplicate_ids() {
        let selection =
            SelectionSet::from_products(vec![product(1, "first"), product(1, "second")]);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.products()[0].name, "first");
    }

    #[test]
    fn test_routine_products_subset_in_order() {
        let mut selection = SelectionSet::new();
        selection.add(product(5, "e"));
        selection.add(product(4, "d"));

        let routine = selection.routine_products();
        assert_eq!(routine.len(), 2);
        assert_eq!(routine[0].name, "e");
        assert_eq!(routine[1].name, "d");
    }
}
