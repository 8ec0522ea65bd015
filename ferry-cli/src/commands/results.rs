//! Retrieval command handler

use anyhow::Result;
use colored::*;
use ferry_client::BatchServiceClient;
use ferry_sync::Config;
use ferry_sync::service::{RetrievalOutcome, RetrievalService};
use std::sync::Arc;

/// Run one retrieval cycle and print the per-batch outcomes
pub async fn run(config: Config) -> Result<()> {
    let client = Arc::new(BatchServiceClient::new(
        config.api_base_url.clone(),
        config.api_key.clone(),
    ));
    let service = RetrievalService::new(config, client);

    let report = service.run_cycle().await?;

    if report.is_empty() {
        println!("{}", "No completed batches to download.".yellow());
        return Ok(());
    }

    println!("{}", "Retrieval report:".bold());
    for outcome in &report.outcomes {
        match outcome {
            RetrievalOutcome::Downloaded { batch_id, path } => {
                println!(
                    "  {} {} {} {}",
                    "✓".green(),
                    batch_id,
                    "->".dimmed(),
                    path.display().to_string().dimmed()
                );
            }
            RetrievalOutcome::Skipped { batch_id, reason } => {
                println!("  {} {}: {}", "⚠".yellow(), batch_id, reason.yellow());
            }
            RetrievalOutcome::Failed { batch_id, reason } => {
                println!("  {} {}: {}", "✗".red(), batch_id, reason.red());
            }
        }
    }
    println!();
    println!(
        "{}",
        format!(
            "{} downloaded, {} skipped, {} failed",
            report.downloaded(),
            report.skipped(),
            report.failed()
        )
        .bold()
    );

    Ok(())
}
