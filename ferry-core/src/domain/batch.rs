//! Remote batch domain types
//!
//! A `Batch` is the snapshot of one remote batch job as reported by the
//! service. Field names and timestamp encodings follow the service wire
//! format so a listing page deserializes directly into domain values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a remote batch job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Validating,
    Failed,
    InProgress,
    Finalizing,
    Completed,
    Expired,
    Cancelling,
    Cancelled,
}

/// Caller-supplied metadata attached to a batch job
///
/// Ferry stores the originating local file name here so later cycles can
/// correlate a remote batch back to the file it was created from. Unknown
/// metadata keys written by other tools are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchMetadata {
    /// Name of the local file this batch was created from
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl BatchMetadata {
    /// Creates metadata carrying the originating file name
    pub fn for_file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
        }
    }
}

/// A remote batch job as reported by the batch service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Service-assigned batch identifier
    pub id: String,
    /// Current lifecycle state
    pub status: BatchStatus,
    /// Identifier of the uploaded input file the batch was created from
    #[serde(default)]
    pub input_file_id: Option<String>,
    /// Identifier of the stored output file, present once results exist
    #[serde(default)]
    pub output_file_id: Option<String>,
    /// Caller-supplied metadata, absent when the batch was created without any
    #[serde(default)]
    pub metadata: Option<BatchMetadata>,
    /// Creation time, epoch seconds on the wire
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Completion time, epoch seconds on the wire, absent until terminal
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Batch {
    /// Returns true when the batch finished successfully and results
    /// may be available for download.
    pub fn is_completed(&self) -> bool {
        self.status == BatchStatus::Completed
    }

    /// The local file name recorded in the batch metadata, if any.
    ///
    /// This is the correlation key between remote batches and local files.
    pub fn file_name(&self) -> Option<&str> {
        self.metadata.as_ref()?.file_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_deserializes_from_wire_format() {
        let json = r#"{
            "id": "batch_abc123",
            "object": "batch",
            "endpoint": "/v1/chat/completions",
            "input_file_id": "file-abc123",
            "completion_window": "24h",
            "status": "in_progress",
            "output_file_id": null,
            "created_at": 1711471533,
            "metadata": {
                "fileName": "reports.jsonl",
                "origin": "nightly"
            }
        }"#;

        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.id, "batch_abc123");
        assert_eq!(batch.status, BatchStatus::InProgress);
        assert_eq!(batch.input_file_id.as_deref(), Some("file-abc123"));
        assert_eq!(batch.output_file_id, None);
        assert_eq!(batch.completed_at, None);
        assert_eq!(batch.created_at.timestamp(), 1711471533);
        assert_eq!(batch.file_name(), Some("reports.jsonl"));
    }

    #[test]
    fn test_batch_without_metadata_has_no_file_name() {
        let json = r#"{
            "id": "batch_x",
            "status": "completed",
            "output_file_id": "file-out",
            "created_at": 1711471533,
            "completed_at": 1711493017
        }"#;

        let batch: Batch = serde_json::from_str(json).unwrap();
        assert!(batch.is_completed());
        assert_eq!(batch.file_name(), None);
        assert_eq!(batch.completed_at.unwrap().timestamp(), 1711493017);
    }

    #[test]
    fn test_only_completed_status_counts_as_completed() {
        let statuses = [
            (BatchStatus::Validating, false),
            (BatchStatus::Failed, false),
            (BatchStatus::InProgress, false),
            (BatchStatus::Finalizing, false),
            (BatchStatus::Completed, true),
            (BatchStatus::Expired, false),
            (BatchStatus::Cancelling, false),
            (BatchStatus::Cancelled, false),
        ];
        for (status, expected) in statuses {
            let batch = Batch {
                id: "batch_x".to_string(),
                status,
                input_file_id: None,
                output_file_id: None,
                metadata: None,
                created_at: Utc::now(),
                completed_at: None,
            };
            assert_eq!(batch.is_completed(), expected, "status {status:?}");
        }
    }

    #[test]
    fn test_metadata_serializes_with_wire_key() {
        let metadata = BatchMetadata::for_file("demand.jsonl");
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({ "fileName": "demand.jsonl" }));
    }
}
