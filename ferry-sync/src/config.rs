//! Sync engine configuration
//!
//! Defines all configurable parameters for a sync cycle including the
//! source and target directories, the batch service connection settings,
//! and the batch creation policy.

use std::path::PathBuf;

/// Sync engine configuration
///
/// Configuration is read once at process start and stays immutable for the
/// lifetime of a cycle.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for batch-input files
    pub source_dir: PathBuf,

    /// Directory downloaded results are written into
    pub target_dir: PathBuf,

    /// Batch service base URL (e.g., "https://api.openai.com/v1")
    pub api_base_url: String,

    /// Bearer token used to authenticate against the batch service
    pub api_key: String,

    /// Page size used when listing remote batches
    pub list_page_size: u32,

    /// Service endpoint every request line in an input file targets
    pub endpoint: String,

    /// Processing window granted to the service for each batch
    pub completion_window: String,

    /// Model written into generated sample request lines
    pub model: String,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(api_key: String) -> Self {
        Self {
            source_dir: PathBuf::from("./source_dir"),
            target_dir: PathBuf::from("./target_dir"),
            api_base_url: "https://api.openai.com/v1".to_string(),
            api_key,
            list_page_size: 20,
            endpoint: "/v1/chat/completions".to_string(),
            completion_window: "24h".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - FERRY_API_KEY (required)
    /// - FERRY_SOURCE_DIR (optional, default: ./source_dir)
    /// - FERRY_TARGET_DIR (optional, default: ./target_dir)
    /// - FERRY_API_BASE_URL (optional, default: https://api.openai.com/v1)
    /// - FERRY_LIST_PAGE_SIZE (optional, default: 20)
    /// - FERRY_ENDPOINT (optional, default: /v1/chat/completions)
    /// - FERRY_COMPLETION_WINDOW (optional, default: 24h)
    /// - FERRY_MODEL (optional, default: gpt-4o-mini)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("FERRY_API_KEY")
            .map_err(|_| anyhow::anyhow!("FERRY_API_KEY environment variable not set"))?;

        let mut config = Self::new(api_key);

        if let Ok(dir) = std::env::var("FERRY_SOURCE_DIR") {
            config.source_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("FERRY_TARGET_DIR") {
            config.target_dir = PathBuf::from(dir);
        }

        if let Ok(url) = std::env::var("FERRY_API_BASE_URL") {
            config.api_base_url = url;
        }

        config.list_page_size = std::env::var("FERRY_LIST_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(config.list_page_size);

        if let Ok(endpoint) = std::env::var("FERRY_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(window) = std::env::var("FERRY_COMPLETION_WINDOW") {
            config.completion_window = window;
        }

        if let Ok(model) = std::env::var("FERRY_MODEL") {
            config.model = model;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("api_key cannot be empty");
        }

        if self.api_base_url.is_empty() {
            anyhow::bail!("api_base_url cannot be empty");
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!("api_base_url must start with http:// or https://");
        }

        if self.list_page_size == 0 {
            anyhow::bail!("list_page_size must be greater than 0");
        }

        if !self.endpoint.starts_with('/') {
            anyhow::bail!("endpoint must start with /");
        }

        if self.completion_window.is_empty() {
            anyhow::bail!("completion_window cannot be empty");
        }

        Ok(())
    }
}
