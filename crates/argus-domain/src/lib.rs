//! Argus Domain Layer
//!
//! This crate contains the entity model for Argus: the structured pieces of
//! an argument and the research artifacts built around them. It holds no
//! scoring or rendering logic; those live in `argus-validator` and
//! `argus-repro`, which depend on this crate and never the reverse.
//!
//! ## Key Concepts
//!
//! - **Argument**: The root aggregate - a claim with its evidence, warrant,
//!   counterarguments, rebuttals and limitations
//! - **Evidence**: A supporting observation with a confidence in [0, 1]
//! - **Evidence Chain**: An ordered, append-only trail of evidence
//! - **Hypothesis**: A proposed explanation with assumptions and predictions
//! - **Counterargument / Rebuttal**: Objections raised and the answers to them
//!
//! ## Invariants
//!
//! The only enforced invariant is `Evidence::confidence() ∈ [0.0, 1.0]`.
//! Everything else is accepted as given.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod argument;
pub mod claim;
pub mod element;
pub mod error;
pub mod evidence;
pub mod hypothesis;
pub mod strength;

// Re-exports for convenience
pub use argument::{Argument, Counterargument, CounterargumentEntry, Rebuttal};
pub use claim::Claim;
pub use element::Element;
pub use error::{DomainError, Result};
pub use evidence::{Evidence, EvidenceChain};
pub use hypothesis::Hypothesis;
pub use strength::EvidenceStrength;
