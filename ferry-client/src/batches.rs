//! Batch-related API endpoints

use crate::BatchServiceClient;
use crate::error::Result;
use ferry_core::domain::batch::Batch;
use ferry_core::dto::batch::{BatchPage, CreateBatchRequest};
use tracing::debug;

impl BatchServiceClient {
    // =============================================================================
    // Batch Jobs
    // =============================================================================

    /// List every batch known to the service
    ///
    /// Pages through `GET /batches` with the given page size, following the
    /// `after` cursor until the service reports no further pages.
    ///
    /// # Arguments
    /// * `page_size` - Maximum number of batches requested per page
    ///
    /// # Returns
    /// All batches across every page, in service order
    pub async fn list_batches(&self, page_size: u32) -> Result<Vec<Batch>> {
        let url = format!("{}/batches", self.base_url);
        let mut batches = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(&self.api_key)
                .query(&[("limit", page_size.to_string())]);
            if let Some(cursor) = &after {
                request = request.query(&[("after", cursor.as_str())]);
            }

            let response = request.send().await?;
            let page: BatchPage = self.handle_response(response).await?;

            debug!("fetched page with {} batches", page.data.len());

            // The service sends an explicit cursor; fall back to the last
            // entry's id for implementations that omit it.
            let cursor = page
                .last_id
                .clone()
                .or_else(|| page.data.last().map(|batch| batch.id.clone()));
            batches.extend(page.data);

            if !page.has_more {
                break;
            }
            match cursor {
                Some(cursor) => after = Some(cursor),
                None => break,
            }
        }

        Ok(batches)
    }

    /// Create a batch job from an uploaded input file
    ///
    /// # Arguments
    /// * `request` - The creation request referencing the uploaded file
    ///
    /// # Returns
    /// The created batch as reported by the service
    pub async fn create_batch(&self, request: &CreateBatchRequest) -> Result<Batch> {
        let url = format!("{}/batches", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
