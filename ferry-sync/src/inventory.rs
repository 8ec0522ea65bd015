//! Source directory inventory
//!
//! Scans the configured source directory and produces the local half of the
//! reconciliation input. The scan is a flat, non-recursive directory read;
//! entries that are not regular files are skipped.

use chrono::{DateTime, Utc};
use ferry_core::domain::inventory::LocalFile;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Scans `dir` and returns every regular file with its modification time.
///
/// No name filtering happens here; the reconciliation step decides which
/// files are candidates. Any error reading the directory or a file's
/// metadata fails the whole scan, since a partial inventory would make the
/// reconciliation unsound.
pub fn scan_source_dir(dir: &Path) -> io::Result<Vec<LocalFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;

        if !metadata.is_file() {
            debug!("Skipping non-file entry {}", entry.path().display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let modified = metadata.modified()?;

        files.push(LocalFile {
            name,
            path: entry.path(),
            last_modified: DateTime::<Utc>::from(modified),
        });
    }

    Ok(files)
}
