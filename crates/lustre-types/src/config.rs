//! Application configuration for Lustre.
//!
//! Deserialized from `{data_dir}/config.toml`. Every field has a default so
//! a partial (or absent) file still yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed default chat completion endpoint (a Cloudflare Worker proxy).
pub const DEFAULT_ENDPOINT: &str = "https://loreal-worker.robertalamo.workers.dev/";

/// Default model identifier sent with every request.
///
/// A model with web search support, so the assistant can cite links.
pub const DEFAULT_MODEL: &str = "gpt-4o-search-preview";

/// Default HTTP request timeout in seconds. The session itself enforces no
/// timeout; this is the client-level bound.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chat completion endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent in the request body.
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the catalog JSON path. When absent, the catalog is read
    /// from `{data_dir}/products.json`.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            catalog_path: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
