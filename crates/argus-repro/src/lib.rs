//! Argus Reproducibility
//!
//! Turns arguments into things a reviewer can act on:
//! - A reproducibility checklist derived from evidence, warrant and
//!   limitations
//! - A Markdown research artifact combining hypothesis, argument and
//!   checklist
//! - A package directory holding that artifact as `README.md`
//!
//! Checklist generation is a free function over an [`Argument`]; the
//! domain model has no knowledge of this crate.
//!
//! # Examples
//!
//! ```
//! use argus_domain::{Argument, Evidence};
//! use argus_repro::{generate_checklist, ResearchArtifact};
//!
//! let arg = Argument::new("Test Claim")
//!     .with_evidence(Evidence::new("Data").with_source("file.csv"))
//!     .with_warrant("Logic");
//!
//! let checklist = generate_checklist(&arg);
//! assert_eq!(checklist.len(), 4);
//!
//! let markdown = ResearchArtifact::from_argument(arg).render_markdown();
//! assert!(markdown.contains("file.csv"));
//! ```
//!
//! [`Argument`]: argus_domain::Argument

#![warn(missing_docs)]

mod artifact;
mod checklist;
mod error;

pub use artifact::{ResearchArtifact, PACKAGE_README};
pub use checklist::{
    checklist_items, generate_checklist, ChecklistItem, ItemStatus, WARRANT_PREVIEW_CHARS,
};
pub use error::ExportError;
