//! Argus CLI - Command-line interface for argument validation and
//! reproducibility artifacts.

use argus_cli::commands;
use argus_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> argus_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit config must exist; the default one is optional
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Validate(args) => {
            commands::execute_validate(args, &config.validation, &formatter)?;
        }
        Command::Checklist(args) => {
            commands::execute_checklist(args, &formatter)?;
        }
        Command::Export(args) => {
            commands::execute_export(args, &formatter)?;
        }
    }

    Ok(())
}

/// Initialize tracing (log to stderr).
fn init_tracing(verbose: u8) {
    let directive = log_directive(
        std::env::var("ARGUS_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Pick the filter directive: `ARGUS_LOG`, then `RUST_LOG`, then the
/// verbosity flag. Empty variables are ignored.
fn log_directive(argus_log: Option<String>, rust_log: Option<String>, verbose: u8) -> String {
    argus_log
        .into_iter()
        .chain(rust_log)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_level(verbose).to_string())
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
