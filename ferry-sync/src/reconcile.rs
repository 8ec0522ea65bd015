//! Reconciliation of local files against remote batches
//!
//! The reconciliation decides which local files need (re)submission by
//! comparing filesystem modification times against the creation times of the
//! remote batches correlated to them. Correlation is purely by file name
//! recorded in the batch metadata; the comparison uses the timestamps both
//! sides already carry, so no file content is read here.

use ferry_core::domain::batch::Batch;
use ferry_core::domain::inventory::LocalFile;

/// Extension a local file must carry to be considered a batch input
pub const BATCH_INPUT_EXT: &str = ".jsonl";

/// Selects the local files that are due for submission.
///
/// A file is selected when it carries the batch-input extension and is
/// strictly newer than every remote batch correlated to it. A batch
/// correlates to a file when its metadata records exactly that file name;
/// batches without metadata, or recorded for other files, put no constraint
/// on the decision. A file with no correlated batch at all is therefore
/// always selected.
///
/// Equal timestamps do not select: a file modified in the same second its
/// batch was created counts as already submitted.
pub fn select_files_to_submit(local_files: &[LocalFile], batches: &[Batch]) -> Vec<LocalFile> {
    local_files
        .iter()
        .filter(|file| file.name.ends_with(BATCH_INPUT_EXT))
        .filter(|file| {
            batches.iter().all(|batch| match batch.file_name() {
                Some(name) if name == file.name => file.last_modified > batch.created_at,
                _ => true,
            })
        })
        .cloned()
        .collect()
}
