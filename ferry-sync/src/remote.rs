//! Remote batch service seam
//!
//! The sync engine talks to the batch service through this trait rather
//! than the HTTP client directly:
//! - Listing remote batches (paged)
//! - Uploading input files
//! - Creating batch jobs
//! - Downloading stored file content
//!
//! The trait is implemented for [`BatchServiceClient`] for production use
//! and by an in-memory mock for tests.

use async_trait::async_trait;
use ferry_client::{BatchServiceClient, error::Result};
use ferry_core::domain::batch::Batch;
use ferry_core::dto::batch::CreateBatchRequest;
use ferry_core::dto::file::UploadedFile;
use std::path::Path;

/// Operations the sync engine needs from the remote batch service
#[async_trait]
pub trait RemoteBatchService: Send + Sync {
    /// Lists every batch known to the service
    ///
    /// # Arguments
    /// * `page_size` - Maximum number of batches requested per page
    async fn list_batches(&self, page_size: u32) -> Result<Vec<Batch>>;

    /// Uploads a local file for later batch processing
    ///
    /// # Arguments
    /// * `path` - Local path of the file to upload
    /// * `purpose` - Storage purpose the service requires
    async fn upload_file(&self, path: &Path, purpose: &str) -> Result<UploadedFile>;

    /// Creates a batch job from an uploaded input file
    ///
    /// # Arguments
    /// * `request` - The creation request referencing the uploaded file
    async fn create_batch(&self, request: &CreateBatchRequest) -> Result<Batch>;

    /// Downloads the raw content of a stored file
    ///
    /// # Arguments
    /// * `file_id` - Identifier of the stored file
    async fn download_file_content(&self, file_id: &str) -> Result<String>;
}

#[async_trait]
impl RemoteBatchService for BatchServiceClient {
    async fn list_batches(&self, page_size: u32) -> Result<Vec<Batch>> {
        BatchServiceClient::list_batches(self, page_size).await
    }

    async fn upload_file(&self, path: &Path, purpose: &str) -> Result<UploadedFile> {
        BatchServiceClient::upload_file(self, path, purpose).await
    }

    async fn create_batch(&self, request: &CreateBatchRequest) -> Result<Batch> {
        BatchServiceClient::create_batch(self, request).await
    }

    async fn download_file_content(&self, file_id: &str) -> Result<String> {
        BatchServiceClient::download_file_content(self, file_id).await
    }
}
