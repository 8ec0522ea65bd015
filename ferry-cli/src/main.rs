//! Ferry CLI
//!
//! Command-line interface for driving sync cycles between a local directory
//! of batch-input files and a remote batch service.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use ferry_sync::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ferry")]
#[command(about = "Sync local batch-input files with a remote batch service", long_about = None)]
struct Cli {
    /// Source directory scanned for batch-input files
    #[arg(long, env = "FERRY_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Target directory downloaded results are written into
    #[arg(long, env = "FERRY_TARGET_DIR")]
    target_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ferry_sync=info,ferry_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.source_dir {
        config.source_dir = dir;
    }
    if let Some(dir) = cli.target_dir {
        config.target_dir = dir;
    }
    config.validate()?;

    handle_command(cli.command, config).await
}
