//! fenci command-line entry point

use anyhow::Result;
use clap::Parser;
use fenci_cli::commands::Commands;

/// Chinese word segmentation into positioned token streams
#[derive(Debug, Parser)]
#[command(name = "fenci", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
