//! Catalog port and filtering.
//!
//! The catalog is read-only reference data; the `CatalogStore` port loads it
//! fresh on each call (no caching, matching the reference behavior).
//! Filtering is a linear scan over the in-memory list.

use lustre_types::catalog::{Catalog, Product};
use lustre_types::error::CatalogError;

/// Port for loading the product catalog.
///
/// Implementations live in lustre-infra (e.g., `JsonCatalog`).
pub trait CatalogStore: Send + Sync {
    /// Load the full catalog.
    fn load(&self) -> impl std::future::Future<Output = Result<Catalog, CatalogError>> + Send;
}

/// Filter products by exact category and/or case-insensitive substring
/// match over name, brand, and description.
///
/// Both filters apply when both are given; `None` (or a blank search term)
/// means "no constraint". Returns references in catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Product> {
    let term = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| {
            term.as_deref().is_none_or(|t| {
                p.name.to_lowercase().contains(t)
                    || p.brand.to_lowercase().contains(t)
                    || p.description.to_lowercase().contains(t)
            })
        })
        .collect()
}
