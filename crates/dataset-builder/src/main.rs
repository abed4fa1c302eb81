//! Bearing Dataset Builder - Main Entry Point

use anyhow::Context;
use clap::Parser;
use dataset_builder::cli::Cli;
use dataset_builder::{init_logging, BuildConfig, DatasetBuilder};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    info!("=== Bearing Feature Dataset v{} ===", env!("CARGO_PKG_VERSION"));

    let config = BuildConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.apply(config);

    let dataset = DatasetBuilder::new(config)
        .build(&cli.directory)
        .with_context(|| format!("Failed to build dataset from {}", cli.directory.display()))?;

    for (label, count) in dataset.label_counts() {
        info!("{:>16}: {} rows", label, count);
    }

    match &cli.output {
        Some(path) => dataset.save_csv(path)?,
        None => dataset.write_csv(std::io::stdout().lock())?,
    }

    Ok(())
}
