//! Domain error types

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised while constructing domain entities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A value was outside its permitted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
