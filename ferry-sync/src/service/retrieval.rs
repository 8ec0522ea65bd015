//! Retrieval cycle
//!
//! Pulls the results of completed remote batches into the target directory.
//! A cycle lists the remote batches, keeps the completed ones, and fans out
//! one task per batch: download the output file content, then write it to a
//! path derived from the batch id. Re-running a cycle overwrites existing
//! result files with identical content, so retrieval is safe to repeat.

use crate::config::Config;
use crate::error::CycleError;
use crate::remote::RemoteBatchService;
use ferry_core::domain::batch::Batch;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Outcome of one completed batch's trip through the retrieval pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalOutcome {
    /// Results were downloaded and written to the target directory
    Downloaded {
        /// Remote batch identifier
        batch_id: String,
        /// Path the results were written to
        path: PathBuf,
    },
    /// The batch is completed but had no payload to write
    Skipped {
        /// Remote batch identifier
        batch_id: String,
        /// Why nothing was written
        reason: String,
    },
    /// Downloading or writing the results failed; other batches were unaffected
    Failed {
        /// Remote batch identifier
        batch_id: String,
        /// What went wrong
        reason: String,
    },
}

/// Report of one retrieval cycle
#[derive(Debug, Default)]
pub struct RetrievalReport {
    /// Per-batch outcomes, in listing order
    pub outcomes: Vec<RetrievalOutcome>,
}

impl RetrievalReport {
    /// Number of batches whose results were written
    pub fn downloaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RetrievalOutcome::Downloaded { .. }))
            .count()
    }

    /// Number of completed batches with nothing to write
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RetrievalOutcome::Skipped { .. }))
            .count()
    }

    /// Number of batches whose retrieval failed
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RetrievalOutcome::Failed { .. }))
            .count()
    }

    /// True when the cycle had nothing to do
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Drives one retrieval cycle against the batch service
pub struct RetrievalService {
    config: Config,
    remote: Arc<dyn RemoteBatchService>,
}

impl RetrievalService {
    /// Creates a new retrieval service
    pub fn new(config: Config, remote: Arc<dyn RemoteBatchService>) -> Self {
        Self { config, remote }
    }

    /// Runs a full retrieval cycle
    ///
    /// The only fatal error is the remote batch listing. Every download and
    /// write failure stays with its batch and shows up as a
    /// [`RetrievalOutcome::Failed`] entry in the report.
    pub async fn run_cycle(&self) -> Result<RetrievalReport, CycleError> {
        let batches = self.remote.list_batches(self.config.list_page_size).await?;

        if batches.is_empty() {
            info!("No batches found on the remote service");
            return Ok(RetrievalReport::default());
        }

        let completed: Vec<Batch> = batches.into_iter().filter(|b| b.is_completed()).collect();

        if completed.is_empty() {
            info!("No completed batches to download");
            return Ok(RetrievalReport::default());
        }

        info!("Found {} completed batch(es)", completed.len());

        let mut handles = Vec::new();
        for batch in completed {
            handles.push((batch.id.clone(), self.spawn_fetch_task(batch)));
        }

        let mut outcomes = Vec::new();
        for (batch_id, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!("Retrieval task for batch {} panicked: {}", batch_id, e);
                    outcomes.push(RetrievalOutcome::Failed {
                        batch_id,
                        reason: format!("task panicked: {e}"),
                    });
                }
            }
        }

        let report = RetrievalReport { outcomes };
        info!(
            "Retrieval cycle finished: {} downloaded, {} skipped, {} failed",
            report.downloaded(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }

    /// Spawns a task that downloads and writes one batch's results
    fn spawn_fetch_task(&self, batch: Batch) -> tokio::task::JoinHandle<RetrievalOutcome> {
        let remote = Arc::clone(&self.remote);
        let target_dir = self.config.target_dir.clone();

        tokio::spawn(async move { fetch_result(remote, target_dir, batch).await })
    }
}

/// Downloads one completed batch's output and writes it to the target directory
async fn fetch_result(
    remote: Arc<dyn RemoteBatchService>,
    target_dir: PathBuf,
    batch: Batch,
) -> RetrievalOutcome {
    let Some(output_file_id) = batch.output_file_id.clone() else {
        warn!("Batch {} is completed but has no output file", batch.id);
        return RetrievalOutcome::Skipped {
            batch_id: batch.id,
            reason: "no output file reference".to_string(),
        };
    };

    let content = match remote.download_file_content(&output_file_id).await {
        Ok(content) => content,
        Err(e) => {
            error!(
                "Failed to download results of batch {}: {} ({})",
                batch.id,
                e,
                e.kind()
            );
            return RetrievalOutcome::Failed {
                batch_id: batch.id,
                reason: format!("download failed: {e}"),
            };
        }
    };

    if content.is_empty() {
        warn!("Batch {} returned an empty result payload", batch.id);
        return RetrievalOutcome::Skipped {
            batch_id: batch.id,
            reason: "empty result payload".to_string(),
        };
    }

    if let Err(e) = tokio::fs::create_dir_all(&target_dir).await {
        error!(
            "Failed to create target directory {}: {}",
            target_dir.display(),
            e
        );
        return RetrievalOutcome::Failed {
            batch_id: batch.id,
            reason: format!("write failed: {e}"),
        };
    }

    let path = result_path(&target_dir, &batch.id);
    match tokio::fs::write(&path, content).await {
        Ok(()) => {
            info!("Wrote results of batch {} to {}", batch.id, path.display());
            RetrievalOutcome::Downloaded {
                batch_id: batch.id,
                path,
            }
        }
        Err(e) => {
            error!("Failed to write results of batch {}: {}", batch.id, e);
            RetrievalOutcome::Failed {
                batch_id: batch.id,
                reason: format!("write failed: {e}"),
            }
        }
    }
}

/// Builds the result file path for a batch.
///
/// Characters outside `[A-Za-z0-9._-]` in the batch id are replaced so the
/// id can never smuggle path separators into the target directory.
fn result_path(target_dir: &Path, batch_id: &str) -> PathBuf {
    let stem: String = batch_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    target_dir.join(format!("{stem}.jsonl"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::MockBatchService;
    use chrono::Utc;
    use ferry_core::domain::batch::BatchStatus;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(target_dir: &Path) -> Config {
        let mut config = Config::new("sk-test".to_string());
        config.target_dir = target_dir.to_path_buf();
        config
    }

    fn batch_with_status(id: &str, status: BatchStatus, output_file_id: Option<&str>) -> Batch {
        Batch {
            id: id.to_string(),
            status,
            input_file_id: Some(format!("file-{id}")),
            output_file_id: output_file_id.map(str::to_string),
            metadata: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    fn completed(id: &str, output_file_id: Option<&str>) -> Batch {
        batch_with_status(id, BatchStatus::Completed, output_file_id)
    }

    fn service(config: Config, mock: &Arc<MockBatchService>) -> RetrievalService {
        RetrievalService::new(config, Arc::clone(mock) as Arc<dyn RemoteBatchService>)
    }

    #[tokio::test]
    async fn test_downloads_results_of_completed_batches_only() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("results");

        let mut mock = MockBatchService::new();
        mock.batches = vec![
            completed("batch_done", Some("file-out")),
            batch_with_status("batch_running", BatchStatus::InProgress, None),
        ];
        mock.contents
            .insert("file-out".to_string(), "{\"custom_id\":\"request-1\"}\n".to_string());
        let mock = Arc::new(mock);

        let report = service(test_config(&target), &mock)
            .run_cycle()
            .await
            .unwrap();

        assert_eq!(report.downloaded(), 1);
        assert_eq!(report.skipped(), 0);
        assert_eq!(report.failed(), 0);
        assert_eq!(mock.downloads.lock().unwrap().as_slice(), ["file-out"]);

        let written = fs::read_to_string(target.join("batch_done.jsonl")).unwrap();
        assert_eq!(written, "{\"custom_id\":\"request-1\"}\n");
    }

    #[tokio::test]
    async fn test_rerun_overwrites_existing_result_files() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("results");

        let mut mock = MockBatchService::new();
        mock.batches = vec![completed("batch_x", Some("file-out"))];
        mock.contents
            .insert("file-out".to_string(), "first".to_string());
        let mock = Arc::new(mock);

        let report = service(test_config(&target), &mock)
            .run_cycle()
            .await
            .unwrap();
        assert_eq!(report.downloaded(), 1);

        let mut mock = MockBatchService::new();
        mock.batches = vec![completed("batch_x", Some("file-out"))];
        mock.contents
            .insert("file-out".to_string(), "second".to_string());
        let mock = Arc::new(mock);

        let report = service(test_config(&target), &mock)
            .run_cycle()
            .await
            .unwrap();
        assert_eq!(report.downloaded(), 1);

        let written = fs::read_to_string(target.join("batch_x.jsonl")).unwrap();
        assert_eq!(written, "second");
    }

    #[tokio::test]
    async fn test_completed_batch_without_output_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("results");

        let mut mock = MockBatchService::new();
        mock.batches = vec![completed("batch_hollow", None)];
        let mock = Arc::new(mock);

        let report = service(test_config(&target), &mock)
            .run_cycle()
            .await
            .unwrap();

        assert_eq!(report.downloaded(), 0);
        assert_eq!(report.skipped(), 1);
        assert!(mock.downloads.lock().unwrap().is_empty());
        // Nothing was written, so the target directory was never created.
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_empty_result_payload_is_skipped() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("results");

        let mut mock = MockBatchService::new();
        mock.batches = vec![completed("batch_empty", Some("file-out"))];
        mock.contents.insert("file-out".to_string(), String::new());
        let mock = Arc::new(mock);

        let report = service(test_config(&target), &mock)
            .run_cycle()
            .await
            .unwrap();

        assert_eq!(report.skipped(), 1);
        assert!(!target.join("batch_empty.jsonl").exists());
    }

    #[tokio::test]
    async fn test_one_failed_download_leaves_other_batches_unaffected() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("results");

        let mut mock = MockBatchService::new();
        mock.batches = vec![
            completed("batch_ok", Some("file-ok")),
            completed("batch_bad", Some("file-bad")),
        ];
        mock.contents
            .insert("file-ok".to_string(), "payload".to_string());
        mock.fail_downloads_for = vec!["file-bad".to_string()];
        let mock = Arc::new(mock);

        let report = service(test_config(&target), &mock)
            .run_cycle()
            .await
            .unwrap();

        assert_eq!(report.downloaded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(target.join("batch_ok.jsonl").exists());
        assert!(!target.join("batch_bad.jsonl").exists());
    }

    #[tokio::test]
    async fn test_listing_failure_aborts_cycle() {
        let dir = TempDir::new().unwrap();

        let mut mock = MockBatchService::new();
        mock.fail_listing = true;
        let mock = Arc::new(mock);

        let result = service(test_config(dir.path()), &mock).run_cycle().await;

        assert!(matches!(result, Err(CycleError::Listing(_))));
        assert!(mock.downloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_completed_batches_ends_cycle_early() {
        let dir = TempDir::new().unwrap();

        let mut mock = MockBatchService::new();
        mock.batches = vec![batch_with_status(
            "batch_running",
            BatchStatus::InProgress,
            None,
        )];
        let mock = Arc::new(mock);

        let report = service(test_config(dir.path()), &mock)
            .run_cycle()
            .await
            .unwrap();

        assert!(report.is_empty());
        assert!(mock.downloads.lock().unwrap().is_empty());
    }

    #[test]
    fn test_result_path_keeps_safe_ids_readable() {
        let path = result_path(Path::new("/results"), "batch_68a1-f00d.v2");
        assert_eq!(path, Path::new("/results/batch_68a1-f00d.v2.jsonl"));
    }

    #[test]
    fn test_result_path_replaces_unsafe_characters() {
        let path = result_path(Path::new("/results"), "batch/../etc:nasty");
        assert_eq!(path, Path::new("/results/batch_.._etc_nasty.jsonl"));
    }
}
