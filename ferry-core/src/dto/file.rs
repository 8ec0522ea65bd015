//! File endpoint payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored file as reported by the service after upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Service-assigned file identifier, referenced when creating a batch
    pub id: String,
    /// Original file name as sent in the upload
    pub filename: String,
    /// Stored size in bytes
    #[serde(default)]
    pub bytes: u64,
    /// Upload time, epoch seconds on the wire
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
