//! Configuration loader and data directory layout.
//!
//! Reads `config.toml` from the data directory (`~/.lustre/` in production)
//! and deserializes it into [`AppConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use lustre_types::config::AppConfig;

/// Resolve the default data directory: `~/.lustre`, or `./.lustre` when no
/// home directory can be determined.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".lustre"))
        .unwrap_or_else(|| PathBuf::from(".lustre"))
}

/// The persisted selection path: `{data_dir}/selection.json`.
pub fn selection_path(data_dir: &Path) -> PathBuf {
    data_dir.join("selection.json")
}

/// The catalog path: the config override when set, `{data_dir}/products.json`
/// otherwise.
pub fn catalog_path(config: &AppConfig, data_dir: &Path) -> PathBuf {
    config
        .catalog_path
        .clone()
        .unwrap_or_else(|| data_dir.join("products.json"))
}

/// Load application configuration from `{data_dir}/config.toml`.
///
/// - Missing file: returns [`AppConfig::default()`].
/// - Unreadable or unparseable file: logs a warning, returns the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lustre_types::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
endpoint = "https://chat.example.test/"
model = "gpt-4o-mini"
request_timeout_secs = 45
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.endpoint, "https://chat.example.test/");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.request_timeout_secs, 45);
    }

    #[tokio::test]
    async fn test_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_catalog_path_override() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/srv/products.json")),
            ..AppConfig::default()
        };
        assert_eq!(
            catalog_path(&config, Path::new("/home/x/.lustre")),
            PathBuf::from("/srv/products.json")
        );
    }

    #[test]
    fn test_catalog_path_default_under_data_dir() {
        let config = AppConfig::default();
        assert_eq!(
            catalog_path(&config, Path::new("/home/x/.lustre")),
            PathBuf::from("/home/x/.lustre/products.json")
        );
    }

    #[test]
    fn test_selection_path() {
        assert_eq!(
            selection_path(Path::new("/data")),
            PathBuf::from("/data/selection.json")
        );
    }
}
