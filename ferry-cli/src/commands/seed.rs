//! Sample input command handler

use anyhow::Result;
use colored::*;
use ferry_sync::Config;
use ferry_sync::seed::write_sample_file;

/// Generate a sample batch-input file in the source directory
pub fn run(config: Config, count: usize, name: &str) -> Result<()> {
    std::fs::create_dir_all(&config.source_dir)?;
    let path = config.source_dir.join(name);

    write_sample_file(&path, &config.model, count)?;

    println!(
        "{} Wrote {} sample request(s) to {}",
        "✓".green(),
        count,
        path.display()
    );

    Ok(())
}
