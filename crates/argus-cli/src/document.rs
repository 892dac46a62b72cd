//! Artifact document loading.
//!
//! An artifact document holds an optional `hypothesis` and an optional
//! `argument`. Files ending in `.toml` are parsed as TOML, anything else as
//! JSON.

use crate::error::{CliError, Result};
use argus_domain::Argument;
use argus_repro::ResearchArtifact;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load an artifact document from disk.
pub fn load_document(path: &Path) -> Result<ResearchArtifact> {
    let contents = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let artifact: ResearchArtifact = if is_toml {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    debug!(
        path = %path.display(),
        has_hypothesis = artifact.hypothesis.is_some(),
        has_argument = artifact.argument.is_some(),
        "Loaded artifact document"
    );
    Ok(artifact)
}

/// Load a document and take its argument, failing if it has none.
pub fn load_argument(path: &Path) -> Result<Argument> {
    load_document(path)?.argument.ok_or_else(|| {
        CliError::InvalidInput(format!("'{}' does not contain an argument", path.display()))
    })
}
