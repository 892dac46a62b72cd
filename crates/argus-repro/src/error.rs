//! Error types for artifact export

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting research artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to write the artifact
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the package directory
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
