//! Batch listing command handler

use anyhow::Result;
use colored::*;
use ferry_client::BatchServiceClient;
use ferry_core::domain::batch::{Batch, BatchStatus};
use ferry_sync::Config;

/// List remote batches and print a summary of each
pub async fn run(config: Config, limit: Option<u32>) -> Result<()> {
    let client = BatchServiceClient::new(config.api_base_url.clone(), config.api_key.clone());
    let page_size = limit.unwrap_or(config.list_page_size);

    let batches = client.list_batches(page_size).await?;

    if batches.is_empty() {
        println!("{}", "No batches found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} batch(es):", batches.len()).bold());
    println!();
    for batch in &batches {
        print_batch_summary(batch);
    }

    Ok(())
}

/// Print a batch summary
fn print_batch_summary(batch: &Batch) {
    println!("  {} Batch {}", "▸".cyan(), batch.id.dimmed());
    if let Some(file_name) = batch.file_name() {
        println!("    File:      {}", file_name);
    }
    println!("    Status:    {}", colorize_status(&batch.status));
    println!(
        "    Created:   {}",
        batch
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    if let Some(completed_at) = batch.completed_at {
        println!(
            "    Completed: {}",
            completed_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    if let Some(output_file_id) = &batch.output_file_id {
        println!("    Output:    {}", output_file_id.dimmed());
    }
    println!();
}

/// Color a batch status for terminal display
fn colorize_status(status: &BatchStatus) -> colored::ColoredString {
    let status_str = format!("{:?}", status);
    match status {
        BatchStatus::Validating => status_str.yellow(),
        BatchStatus::InProgress => status_str.cyan(),
        BatchStatus::Finalizing => status_str.cyan(),
        BatchStatus::Completed => status_str.green(),
        BatchStatus::Failed => status_str.red(),
        BatchStatus::Expired => status_str.red(),
        BatchStatus::Cancelling => status_str.dimmed(),
        BatchStatus::Cancelled => status_str.dimmed(),
    }
}
