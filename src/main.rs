//! CLI entry point for the selection-bias figure generator

use clap::Parser;
use statmeme::io::cli::{Cli, MemeProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> statmeme::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let processor = MemeProcessor::new(cli);
    processor.process().map(|_| ())
}
