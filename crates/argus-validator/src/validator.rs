//! Argument validation

use crate::scoring::{completeness_score_with, evidence_strength_with};
use crate::{ValidationConfig, ValidatorError};
use argus_domain::{Argument, Element, EvidenceStrength};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Elements reported as missing, in reporting order
///
/// The claim is deliberately absent: a missing claim lowers the score but
/// is never listed.
const REPORTED_ELEMENTS: [Element; 4] = [
    Element::Warrant,
    Element::Counterarguments,
    Element::Limitations,
    Element::Evidence,
];

/// Result of validating an argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Completeness score (0.0-100.0)
    pub quality_score: f64,

    /// Rating of the argument's evidence
    pub evidence_strength: EvidenceStrength,

    /// Structural elements that are absent, without duplicates
    pub missing_elements: Vec<Element>,
}

impl ValidationResult {
    /// Whether nothing is reported missing
    pub fn is_complete(&self) -> bool {
        self.missing_elements.is_empty()
    }

    /// Whether a given element is reported missing
    pub fn is_missing(&self, element: Element) -> bool {
        self.missing_elements.contains(&element)
    }
}

/// The Validator scores arguments against a configured rubric
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a Validator with the given configuration
    ///
    /// Fails if the configuration is inconsistent (see
    /// [`ValidationConfig::validate`]).
    pub fn new(config: ValidationConfig) -> Result<Self, ValidatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a Validator with the default rubric
    pub fn default_config() -> Self {
        Self::default()
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate an argument
    ///
    /// Always succeeds. Missing elements are checked in the order warrant,
    /// counterarguments, limitations, evidence.
    pub fn validate(&self, argument: &Argument) -> ValidationResult {
        let quality_score = completeness_score_with(argument, &self.config.weights);
        let evidence_strength = evidence_strength_with(&argument.evidence, &self.config.strength);

        let missing_elements: Vec<Element> = REPORTED_ELEMENTS
            .into_iter()
            .filter(|element| !argument.has(*element))
            .collect();

        debug!(
            quality_score,
            evidence_strength = evidence_strength.as_str(),
            missing = missing_elements.len(),
            "Validated argument"
        );

        ValidationResult {
            quality_score,
            evidence_strength,
            missing_elements,
        }
    }
}
