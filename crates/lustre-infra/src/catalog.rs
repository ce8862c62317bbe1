//! JSON-file catalog loader.
//!
//! Reads the catalog document (`{"products": [...]}`) from disk on every
//! call. No caching: filter operations always see the file as it currently
//! is, matching the reference behavior.

use std::path::PathBuf;

use lustre_core::catalog::CatalogStore;
use lustre_types::catalog::Catalog;
use lustre_types::error::CatalogError;

/// [`CatalogStore`] backed by a JSON file on the local filesystem.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Create a loader for the catalog file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalog {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Read(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
