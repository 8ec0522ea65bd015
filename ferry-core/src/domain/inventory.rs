//! Local file inventory types

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A candidate input file found in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    /// Plain file name, the correlation key against batch metadata
    pub name: String,
    /// Absolute or source-relative path used to read the file content
    pub path: PathBuf,
    /// Filesystem modification time
    pub last_modified: DateTime<Utc>,
}
