//! Cycle-level error types

use ferry_client::ClientError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole sync cycle
///
/// Only two conditions are fatal to a cycle: the source directory cannot be
/// scanned, or the remote batch listing cannot be fetched. Everything after
/// those steps is handled per item and reported in the cycle report instead.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The source directory could not be read
    #[error("Cannot scan source directory {}: {source}", .dir.display())]
    Inventory {
        /// Directory the scan was attempted on
        dir: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The remote batch listing could not be fetched
    #[error("Cannot list remote batches: {0}")]
    Listing(#[from] ClientError),
}
