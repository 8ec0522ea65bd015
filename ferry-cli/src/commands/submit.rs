//! Submission command handler

use anyhow::Result;
use colored::*;
use ferry_client::BatchServiceClient;
use ferry_sync::Config;
use ferry_sync::service::{SubmissionOutcome, SubmissionService};
use std::sync::Arc;

/// Run one submission cycle and print the per-file outcomes
pub async fn run(config: Config) -> Result<()> {
    let client = Arc::new(BatchServiceClient::new(
        config.api_base_url.clone(),
        config.api_key.clone(),
    ));
    let service = SubmissionService::new(config, client);

    let report = service.run_cycle().await?;

    if report.is_empty() {
        println!("{}", "Nothing to submit.".yellow());
        return Ok(());
    }

    println!("{}", "Submission report:".bold());
    for outcome in &report.outcomes {
        match outcome {
            SubmissionOutcome::Submitted { file, batch_id } => {
                println!(
                    "  {} {} {} {}",
                    "✓".green(),
                    file,
                    "->".dimmed(),
                    batch_id.dimmed()
                );
            }
            SubmissionOutcome::Failed { file, reason } => {
                println!("  {} {}: {}", "✗".red(), file, reason.red());
            }
        }
    }
    println!();
    println!(
        "{}",
        format!(
            "{} processed, {} failed",
            report.processed(),
            report.failed()
        )
        .bold()
    );

    Ok(())
}
