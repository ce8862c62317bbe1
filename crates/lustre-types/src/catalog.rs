//! Catalog product types for Lustre.
//!
//! `Catalog` mirrors the on-disk JSON document (a top-level `products`
//! array); `Product` is the immutable reference record for one catalog
//! entry. `RoutineProduct` is the four-field subset sent to the assistant
//! when requesting a routine.

use serde::{Deserialize, Serialize};

/// A single catalog product. Immutable reference data, loaded once per read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// The catalog document: `{"products": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

/// The subset of product fields included in a routine request.
///
/// Field declaration order fixes the serialized field order:
/// name, brand, category, description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for RoutineProduct {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 7,
            name: "Hydra Genius".to_string(),
            brand: "Glossier".to_string(),
            category: "moisturizer".to_string(),
            description: "Lightweight daily moisturizer.".to_string(),
            image: "img/hydra-genius.png".to_string(),
        }
    }

    #[test]
    fn test_catalog_document_shape() {
        let json = r#"{
            "products": [
                {
                    "id": 1,
                    "name": "Revitalift Serum",
                    "brand": "L'Oreal Paris",
                    "category": "serum",
                    "description": "Anti-aging face serum with hyaluronic acid.",
                    "image": "img/revitalift.png"
                }
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].id, 1);
        assert_eq!(catalog.products[0].category, "serum");
    }

    #[test]
    fn test_routine_product_from_product() {
        let product = sample_product();
        let routine = RoutineProduct::from(&product);
        assert_eq!(routine.name, product.name);
        assert_eq!(routine.brand, product.brand);
        assert_eq!(routine.category, product.category);
        assert_eq!(routine.description, product.description);
    }

    #[test]
    fn test_routine_product_field_order() {
        let routine = RoutineProduct::from(&sample_product());
        let json = serde_json::to_string(&routine).unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let brand_pos = json.find("\"brand\"").unwrap();
        let category_pos = json.find("\"category\"").unwrap();
        let description_pos = json.find("\"description\"").unwrap();
        assert!(name_pos < brand_pos);
        assert!(brand_pos < category_pos);
        assert!(category_pos < description_pos);
    }

    #[test]
    fn test_product_roundtrip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
