//! textbreak command-line entry point

use anyhow::Result;
use clap::Parser;
use textbreak_cli::commands::Commands;

/// Unicode grapheme, word, sentence and line-break analysis
#[derive(Debug, Parser)]
#[command(name = "textbreak", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
