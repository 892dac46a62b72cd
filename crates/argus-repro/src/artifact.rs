//! Research artifact export
//!
//! Renders a hypothesis and/or argument, together with its reproducibility
//! checklist, to Markdown and writes reproducibility packages to disk.

use crate::checklist::generate_checklist;
use crate::ExportError;
use argus_domain::{Argument, CounterargumentEntry, Hypothesis};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the Markdown document inside a package directory
pub const PACKAGE_README: &str = "README.md";

/// A research artifact: the hypothesis under study and the argument made
/// for it
///
/// Either part may be absent; absent parts are left out of the rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchArtifact {
    /// Hypothesis under study
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypothesis: Option<Hypothesis>,

    /// Argument made for the hypothesis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<Argument>,
}

impl ResearchArtifact {
    /// Create an artifact holding only an argument
    pub fn from_argument(argument: Argument) -> Self {
        Self {
            hypothesis: None,
            argument: Some(argument),
        }
    }

    /// Attach a hypothesis
    pub fn with_hypothesis(mut self, hypothesis: Hypothesis) -> Self {
        self.hypothesis = Some(hypothesis);
        self
    }

    /// Render the artifact as a Markdown document
    pub fn render_markdown(&self) -> String {
        let mut lines = vec!["# Research Artifact\n".to_string()];

        if let Some(hypothesis) = &self.hypothesis {
            render_hypothesis(hypothesis, &mut lines);
        }

        if let Some(argument) = &self.argument {
            render_argument(argument, &mut lines);
        }

        lines.join("\n")
    }

    /// Write the Markdown rendering to `path`
    pub fn export_markdown<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        fs::write(path, self.render_markdown()).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Exported research artifact");
        Ok(())
    }

    /// Write a reproducibility package into `dir`
    ///
    /// Creates the directory (and any parents) when missing and writes the
    /// Markdown rendering to `README.md` inside it. Returns the README path.
    pub fn write_package<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let readme = dir.join(PACKAGE_README);
        self.export_markdown(&readme)?;
        Ok(readme)
    }
}

fn render_hypothesis(hypothesis: &Hypothesis, lines: &mut Vec<String>) {
    lines.push("## Hypothesis".to_string());
    lines.push(format!("**Statement:** {}\n", hypothesis.statement));

    if !hypothesis.assumptions.is_empty() {
        lines.push("### Assumptions".to_string());
        lines.extend(hypothesis.assumptions.iter().map(|a| format!("- {}", a)));
    }

    if !hypothesis.testable_predictions.is_empty() {
        lines.push("### Testable Predictions".to_string());
        lines.extend(hypothesis.testable_predictions.iter().map(|p| format!("- {}", p)));
    }

    lines.push(String::new());
}

fn render_argument(argument: &Argument, lines: &mut Vec<String>) {
    lines.push("## Core Argument".to_string());
    lines.push(format!("**Claim:** {}\n", argument.claim));

    lines.push("### Evidence Chain".to_string());
    for (idx, ev) in argument.evidence.iter().enumerate() {
        lines.push(format!("#### Evidence {}", idx + 1));
        lines.push(format!("- **Description:** {}", ev.description()));
        lines.push(format!("- **Type:** {}", ev.kind()));
        lines.push(format!("- **Confidence:** {:?}", ev.confidence()));
        if let Some(source) = ev.source() {
            lines.push(format!("- **Source:** {}", source));
        }
        lines.push(String::new());
    }

    lines.push("### Warrant".to_string());
    lines.push(format!("{}\n", argument.warrant));

    if argument.has_counterarguments() {
        lines.push("### Counterarguments".to_string());
        for counter in &argument.counterarguments {
            lines.push(match counter {
                CounterargumentEntry::PlainText(text) => format!("- {}", text),
                CounterargumentEntry::Structured(c) => {
                    format!("- {} (Strength: {})", c.statement, c.strength)
                }
            });
        }
    }

    if argument.has_limitations() {
        lines.push("\n### Limitations".to_string());
        lines.extend(argument.limitations.iter().map(|l| format!("- {}", l)));
    }

    lines.push("\n### Reproducibility Checklist".to_string());
    lines.extend(generate_checklist(argument).into_iter().map(|item| format!("- {}", item)));
}
