//! Argus Validator
//!
//! Scores arguments for structural completeness and rates the strength of
//! their evidence.
//!
//! The Validator provides:
//! - A weighted completeness score (0-100) over claim, evidence, warrant,
//!   counterarguments and limitations
//! - An evidence strength rating (weak, moderate, strong)
//! - The list of structural elements that are missing
//!
//! # Examples
//!
//! ```
//! use argus_domain::{Argument, Element, EvidenceStrength};
//! use argus_validator::Validator;
//!
//! let validator = Validator::default_config();
//! let result = validator.validate(&Argument::new("Empty Claim"));
//!
//! assert_eq!(result.quality_score, 20.0);
//! assert_eq!(result.evidence_strength, EvidenceStrength::Weak);
//! assert!(result.is_missing(Element::Evidence));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
pub mod scoring;
mod validator;

pub use config::{CompletenessWeights, StrengthThresholds, ValidationConfig, WEIGHT_TOTAL};
pub use error::ValidatorError;
pub use scoring::{
    average_confidence, completeness_score, completeness_score_with, evidence_strength,
    evidence_strength_with,
};
pub use validator::{ValidationResult, Validator};
