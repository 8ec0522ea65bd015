//! Batch endpoint payloads

use crate::domain::batch::{Batch, BatchMetadata};
use serde::{Deserialize, Serialize};

/// Request body for creating a batch job from an uploaded input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBatchRequest {
    /// Identifier of the previously uploaded input file
    pub input_file_id: String,
    /// Service endpoint every request line in the file targets
    pub endpoint: String,
    /// Processing window the service is allowed to take
    pub completion_window: String,
    /// Correlation metadata stored on the batch
    pub metadata: BatchMetadata,
}

impl CreateBatchRequest {
    /// Builds a creation request that records the originating file name
    /// in the batch metadata.
    pub fn new(
        input_file_id: impl Into<String>,
        endpoint: impl Into<String>,
        completion_window: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            input_file_id: input_file_id.into(),
            endpoint: endpoint.into(),
            completion_window: completion_window.into(),
            metadata: BatchMetadata::for_file(file_name),
        }
    }
}

/// One page of the remote batch listing
#[derive(Debug, Clone, Deserialize)]
pub struct BatchPage {
    /// Batches on this page
    pub data: Vec<Batch>,
    /// Whether more pages follow
    #[serde(default)]
    pub has_more: bool,
    /// Cursor of the last entry, used as the `after` parameter of the next page
    #[serde(default)]
    pub last_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_serializes_to_wire_format() {
        let request = CreateBatchRequest::new(
            "file-abc123",
            "/v1/chat/completions",
            "24h",
            "orders.jsonl",
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input_file_id": "file-abc123",
                "endpoint": "/v1/chat/completions",
                "completion_window": "24h",
                "metadata": { "fileName": "orders.jsonl" }
            })
        );
    }

    #[test]
    fn test_batch_page_deserializes_with_cursor() {
        let json = r#"{
            "object": "list",
            "data": [
                { "id": "batch_a", "status": "completed", "created_at": 1711471533 },
                { "id": "batch_b", "status": "validating", "created_at": 1711471600 }
            ],
            "first_id": "batch_a",
            "last_id": "batch_b",
            "has_more": true
        }"#;

        let page: BatchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.last_id.as_deref(), Some("batch_b"));
    }

    #[test]
    fn test_batch_page_defaults_when_pagination_fields_missing() {
        let page: BatchPage = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(page.data.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.last_id, None);
    }
}
