//! lexsent command-line entry point

use anyhow::Result;
use clap::Parser;
use lexsent_cli::commands::Commands;

/// Lexicon-based document sentiment classification
#[derive(Debug, Parser)]
#[command(name = "lexsent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
