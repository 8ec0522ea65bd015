//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod batches;
mod results;
mod seed;
mod submit;

use anyhow::Result;
use clap::Subcommand;
use ferry_sync::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit new and modified input files as batch jobs
    Submit,
    /// Download results of completed batch jobs
    Results,
    /// List remote batch jobs
    Batches {
        /// Page size used when listing
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Write a sample batch-input file into the source directory
    Seed {
        /// Number of request lines to generate
        #[arg(short, long, default_value_t = 3)]
        count: usize,

        /// File name to create
        #[arg(short, long, default_value = "batch_input_sample.jsonl")]
        name: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The engine configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Submit => submit::run(config).await,
        Commands::Results => results::run(config).await,
        Commands::Batches { limit } => batches::run(config, limit).await,
        Commands::Seed { count, name } => seed::run(config, count, &name),
    }
}
