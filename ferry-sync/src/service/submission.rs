//! Submission cycle
//!
//! Pushes due local files to the batch service. A cycle scans the source
//! directory, reconciles it against the remote batch listing, and then fans
//! out one task per selected file: upload, then batch creation. Each file
//! runs in its own task so one failure never blocks the others.

use crate::config::Config;
use crate::error::CycleError;
use crate::inventory::scan_source_dir;
use crate::reconcile::select_files_to_submit;
use crate::remote::RemoteBatchService;
use ferry_core::domain::inventory::LocalFile;
use ferry_core::dto::batch::CreateBatchRequest;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Storage purpose the service requires for batch input files
const UPLOAD_PURPOSE: &str = "batch";

/// Outcome of one file's trip through the submission pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The file was uploaded and a batch job was created for it
    Submitted {
        /// Local file name
        file: String,
        /// Identifier of the created batch
        batch_id: String,
    },
    /// The file could not be submitted; other files were unaffected
    Failed {
        /// Local file name
        file: String,
        /// What went wrong
        reason: String,
    },
}

/// Report of one submission cycle
#[derive(Debug, Default)]
pub struct SubmissionReport {
    /// Per-file outcomes, in selection order
    pub outcomes: Vec<SubmissionOutcome>,
}

impl SubmissionReport {
    /// Number of files submitted successfully
    pub fn processed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SubmissionOutcome::Submitted { .. }))
            .count()
    }

    /// Number of files that failed to submit
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SubmissionOutcome::Failed { .. }))
            .count()
    }

    /// True when the cycle had nothing to do
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Drives one submission cycle against the batch service
pub struct SubmissionService {
    config: Config,
    remote: Arc<dyn RemoteBatchService>,
}

impl SubmissionService {
    /// Creates a new submission service
    pub fn new(config: Config, remote: Arc<dyn RemoteBatchService>) -> Self {
        Self { config, remote }
    }

    /// Runs a full submission cycle
    ///
    /// Only two failures abort the cycle: the source directory scan and the
    /// remote batch listing. Once the fan-out starts, failures stay with
    /// their file and show up as [`SubmissionOutcome::Failed`] entries in
    /// the report.
    pub async fn run_cycle(&self) -> Result<SubmissionReport, CycleError> {
        let local_files =
            scan_source_dir(&self.config.source_dir).map_err(|source| CycleError::Inventory {
                dir: self.config.source_dir.clone(),
                source,
            })?;

        if local_files.is_empty() {
            warn!(
                "No files found in source directory {}",
                self.config.source_dir.display()
            );
            return Ok(SubmissionReport::default());
        }

        let batches = self.remote.list_batches(self.config.list_page_size).await?;

        if batches.is_empty() {
            info!("No batches found on the remote service");
            return Ok(SubmissionReport::default());
        }

        let selected = select_files_to_submit(&local_files, &batches);

        if selected.is_empty() {
            info!("No local files are newer than their remote batches");
            return Ok(SubmissionReport::default());
        }

        info!("Found {} file(s) to submit", selected.len());

        let mut handles = Vec::new();
        for file in selected {
            handles.push((file.name.clone(), self.spawn_submit_task(file)));
        }

        let mut outcomes = Vec::new();
        for (name, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!("Submission task for {} panicked: {}", name, e);
                    outcomes.push(SubmissionOutcome::Failed {
                        file: name,
                        reason: format!("task panicked: {e}"),
                    });
                }
            }
        }

        let report = SubmissionReport { outcomes };
        info!(
            "Submission cycle finished: {} processed, {} failed",
            report.processed(),
            report.failed()
        );
        Ok(report)
    }

    /// Spawns a task that pushes one file through upload and batch creation
    fn spawn_submit_task(&self, file: LocalFile) -> tokio::task::JoinHandle<SubmissionOutcome> {
        let remote = Arc::clone(&self.remote);
        let endpoint = self.config.endpoint.clone();
        let completion_window = self.config.completion_window.clone();

        tokio::spawn(async move { submit_file(remote, file, endpoint, completion_window).await })
    }
}

/// Uploads one file and creates a batch job for it
async fn submit_file(
    remote: Arc<dyn RemoteBatchService>,
    file: LocalFile,
    endpoint: String,
    completion_window: String,
) -> SubmissionOutcome {
    info!("Uploading {}", file.name);

    let uploaded = match remote.upload_file(&file.path, UPLOAD_PURPOSE).await {
        Ok(uploaded) => uploaded,
        Err(e) => {
            error!("Failed to upload {}: {} ({})", file.name, e, e.kind());
            return SubmissionOutcome::Failed {
                file: file.name,
                reason: format!("upload failed: {e}"),
            };
        }
    };

    let request = CreateBatchRequest::new(
        uploaded.id,
        endpoint,
        completion_window,
        file.name.clone(),
    );

    match remote.create_batch(&request).await {
        Ok(batch) => {
            info!("Created batch {} for {}", batch.id, file.name);
            SubmissionOutcome::Submitted {
                file: file.name,
                batch_id: batch.id,
            }
        }
        Err(e) => {
            error!(
                "Failed to create batch for {}: {} ({})",
                file.name,
                e,
                e.kind()
            );
            SubmissionOutcome::Failed {
                file: file.name,
                reason: format!("batch creation failed: {e}"),
            }
        }
    }
}
