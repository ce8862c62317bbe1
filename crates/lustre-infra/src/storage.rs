//! File-backed selection persistence.
//!
//! The selection is one JSON file holding the serialized ordered sequence
//! of full product records. It is overwritten on every mutation and read
//! back at startup. Missing or malformed data degrades to an empty
//! selection with a logged warning -- never an error to the caller.

use std::path::PathBuf;

use lustre_core::selection::{SelectionSet, SelectionStore};
use lustre_types::catalog::Product;
use lustre_types::error::StorageError;

/// [`SelectionStore`] backed by a single JSON file.
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    /// Create a store persisting to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SelectionStore for FileSelectionStore {
    async fn load(&self) -> Result<SelectionSet, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SelectionSet::new());
            }
            Err(err) => return Err(StorageError::Read(err.to_string())),
        };

        match serde_json::from_str::<Vec<Product>>(&content) {
            Ok(products) => Ok(SelectionSet::from_products(products)),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed persisted selection, resetting to empty"
                );
                Ok(SelectionSet::new())
            }
        }
    }

    async fn save(&self, selection: &SelectionSet) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(selection.products())
            .expect("Product serialization is infallible");

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

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

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = FileSelectionStore::new(tmp.path().join("selection.json"));

        let mut selection = SelectionSet::new();
        selection.add(product(3, "c"));
        selection.add(product(1, "a"));
        store.save(&selection).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.products(), selection.products());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileSelectionStore::new(tmp.path().join("selection.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_file_resets_to_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("selection.json");
        tokio::fs::write(&path, "{{ definitely not json").await.unwrap();

        let store = FileSelectionStore::new(&path);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("selection.json");
        let store = FileSelectionStore::new(&path);

        let mut selection = SelectionSet::new();
        selection.add(product(1, "a"));
        store.save(&selection).await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let tmp = TempDir::new().unwrap();
        let store = FileSelectionStore::new(tmp.path().join("selection.json"));

        let mut selection = SelectionSet::new();
        selection.add(product(1, "a"));
        selection.add(product(2, "b"));
        store.save(&selection).await.unwrap();

        selection.remove(1);
        store.save(&selection).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains(2));
    }
}
