//! Shared application state for CLI commands.

use std::path::PathBuf;

use lustre_infra::catalog::JsonCatalog;
use lustre_infra::client::WorkerAssistantClient;
use lustre_infra::config;
use lustre_infra::storage::FileSelectionStore;
use lustre_types::config::AppConfig;

/// Everything a command handler needs: the loaded configuration and the
/// constructed stores/client.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: JsonCatalog,
    pub selection_store: FileSelectionStore,
    pub client: WorkerAssistantClient,
}

impl AppState {
    /// Initialize application state.
    ///
    /// `data_dir` and `catalog` override the default data directory and the
    /// configured catalog path respectively.
    pub async fn init(data_dir: Option<PathBuf>, catalog: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(config::default_data_dir);
        tracing::debug!(data_dir = %data_dir.display(), "resolving application state");
        let mut app_config = config::load_config(&data_dir).await;
        if let Some(path) = catalog {
            app_config.catalog_path = Some(path);
        }

        let catalog = JsonCatalog::new(config::catalog_path(&app_config, &data_dir));
        let selection_store = FileSelectionStore::new(config::selection_path(&data_dir));
        let client = WorkerAssistantClient::from_config(&app_config);

        Self {
            config: app_config,
            catalog,
            selection_store,
            client,
        }
    }
}
