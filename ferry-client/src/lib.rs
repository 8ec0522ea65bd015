//! Ferry HTTP Client
//!
//! A simple, type-safe HTTP client for communicating with the remote batch
//! service API.
//!
//! This crate provides the single interface the sync engine and CLI use to
//! talk to the service, eliminating code duplication and ensuring consistent
//! authentication and error handling.
//!
//! # Example
//!
//! ```no_run
//! use ferry_client::BatchServiceClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BatchServiceClient::new("https://api.openai.com/v1", "sk-test");
//!
//!     // List every batch known to the service
//!     let batches = client.list_batches(20).await?;
//!
//!     println!("found {} remote batches", batches.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod batches;
mod files;

// Re-export commonly used types
pub use error::{ClientError, ErrorKind, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the remote batch service API
///
/// This client provides methods for the endpoints Ferry relies on,
/// organized into logical groups:
/// - Batch jobs (list with pagination, create)
/// - Stored files (upload, download content)
///
/// Every request is authenticated with the configured bearer token.
#[derive(Debug, Clone)]
pub struct BatchServiceClient {
    /// Base URL of the service (e.g., "https://api.openai.com/v1")
    base_url: String,
    /// Bearer token sent with every request
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl BatchServiceClient {
    /// Create a new batch service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service API (e.g., "https://api.openai.com/v1")
    /// * `api_key` - The bearer token used to authenticate requests
    ///
    /// # Example
    /// ```
    /// use ferry_client::BatchServiceClient;
    ///
    /// let client = BatchServiceClient::new("https://api.openai.com/v1", "sk-test");
    /// ```
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Create a new batch service client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service API
    /// * `api_key` - The bearer token used to authenticate requests
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use ferry_client::BatchServiceClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BatchServiceClient::with_client(
    ///     "https://api.openai.com/v1",
    ///     "sk-test",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is raw text (e.g., file content)
    ///
    /// This method checks the status code and returns an error if the request
    /// failed, or the response body as a string if successful.
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }
}
