//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files and print segments or per-unit attributes
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List embedded tailorings
    Tailorings,

    /// List available output formats
    Formats,

    /// List segmentation units
    Units,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}
