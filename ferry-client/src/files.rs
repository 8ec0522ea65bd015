//! File storage API endpoints

use crate::BatchServiceClient;
use crate::error::{ClientError, Result};
use ferry_core::dto::file::UploadedFile;
use reqwest::multipart;
use std::io;
use std::path::Path;

impl BatchServiceClient {
    // =============================================================================
    // Stored Files
    // =============================================================================

    /// Upload a local file to the service
    ///
    /// Sends the file as a multipart form to `POST /files`, tagged with the
    /// given purpose. The file name sent to the service is the final path
    /// component.
    ///
    /// # Arguments
    /// * `path` - Local path of the file to upload
    /// * `purpose` - Storage purpose the service requires (e.g., "batch")
    ///
    /// # Returns
    /// The stored file record, whose id is used to create a batch
    pub async fn upload_file(&self, path: &Path, purpose: &str) -> Result<UploadedFile> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ClientError::IoError(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("upload source {} has no file name", path.display()),
                ))
            })?;
        let bytes = tokio::fs::read(path).await?;

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("purpose", purpose.to_string());

        let url = format!("{}/files", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Download the raw content of a stored file
    ///
    /// # Arguments
    /// * `file_id` - Identifier of the stored file (e.g., a batch output file)
    ///
    /// # Returns
    /// The file content as text
    pub async fn download_file_content(&self, file_id: &str) -> Result<String> {
        let url = format!("{}/files/{}/content", self.base_url, file_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        self.handle_text_response(response).await
    }
}
