//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validator configuration rejected
    #[error(transparent)]
    Validator(#[from] argus_validator::ValidatorError),

    /// Artifact export failed
    #[error("Export error: {0}")]
    Export(#[from] argus_repro::ExportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Argument scored below the requested minimum
    #[error("Quality score {score} is below the required minimum {minimum}")]
    BelowThreshold {
        /// Score achieved
        score: f64,
        /// Score required
        minimum: f64,
    },
}
