//! Validator error types

use thiserror::Error;

/// Errors that can occur while configuring the validator
///
/// Validation itself never fails; only loading or checking a
/// [`ValidationConfig`](crate::ValidationConfig) can.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
