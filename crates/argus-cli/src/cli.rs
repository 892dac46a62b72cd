//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Argus CLI - Validate structured arguments and export research artifacts.
#[derive(Debug, Parser)]
#[command(name = "argus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ARGUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score an argument for completeness and evidence strength
    Validate(ValidateArgs),

    /// Print the reproducibility checklist for an argument
    Checklist(ChecklistArgs),

    /// Export an artifact document as Markdown
    Export(ExportArgs),
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Artifact document (JSON, or TOML with a .toml extension)
    pub file: PathBuf,

    /// Fail when the quality score is below this value (0-100)
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Arguments for the checklist command.
#[derive(Debug, Parser)]
pub struct ChecklistArgs {
    /// Artifact document (JSON, or TOML with a .toml extension)
    pub file: PathBuf,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Artifact document (JSON, or TOML with a .toml extension)
    pub file: PathBuf,

    /// Destination Markdown file, or directory with --package
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write a package directory containing README.md
    #[arg(long)]
    pub package: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
