//! Validator configuration
//!
//! Scoring weights and strength thresholds. The defaults are the standard
//! Argus rubric; a TOML file may override any subset of them.

use crate::ValidatorError;
use argus_domain::evidence::EXPERIMENTAL_KIND;
use argus_domain::Element;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Total that completeness weights must add up to
pub const WEIGHT_TOTAL: u32 = 100;

/// Points awarded for each structural element that is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessWeights {
    /// Weight of a non-empty claim
    pub claim: u32,

    /// Weight of at least one piece of evidence
    pub evidence: u32,

    /// Weight of a non-empty warrant
    pub warrant: u32,

    /// Weight of at least one counterargument
    pub counterarguments: u32,

    /// Weight of at least one limitation
    pub limitations: u32,
}

impl Default for CompletenessWeights {
    fn default() -> Self {
        Self {
            claim: 20,
            evidence: 30,
            warrant: 20,
            counterarguments: 15,
            limitations: 15,
        }
    }
}

impl CompletenessWeights {
    /// Weight assigned to an element
    pub fn weight(&self, element: Element) -> u32 {
        match element {
            Element::Claim => self.claim,
            Element::Evidence => self.evidence,
            Element::Warrant => self.warrant,
            Element::Counterarguments => self.counterarguments,
            Element::Limitations => self.limitations,
        }
    }

    /// Sum of all weights, widened so it cannot overflow
    pub fn total(&self) -> u64 {
        Element::ALL.iter().map(|e| u64::from(self.weight(*e))).sum()
    }
}

/// Cut-offs for the evidence strength heuristic
///
/// Both thresholds are strict: an average exactly equal to a threshold
/// falls into the lower bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthThresholds {
    /// Average confidence that must be exceeded for "strong"
    pub strong_confidence: f64,

    /// Average confidence that must be exceeded for "moderate"
    pub moderate_confidence: f64,

    /// Evidence kind that must be present for "strong" (exact match)
    pub strong_kind: String,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            strong_confidence: 0.8,
            moderate_confidence: 0.5,
            strong_kind: EXPERIMENTAL_KIND.to_string(),
        }
    }
}

/// Configuration for the [`Validator`](crate::Validator)
///
/// # Examples
///
/// ```
/// use argus_validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.weights.evidence, 30);
///
/// let config = ValidationConfig::from_toml_str(r#"
///     [strength]
///     strong_confidence = 0.9
/// "#).unwrap();
/// assert_eq!(config.strength.strong_confidence, 0.9);
/// assert_eq!(config.strength.moderate_confidence, 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Completeness weights
    pub weights: CompletenessWeights,

    /// Evidence strength thresholds
    pub strength: StrengthThresholds,
}

impl ValidationConfig {
    /// Parse and check a configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ValidatorError> {
        let config: ValidationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and check a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ValidatorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check that the configuration is internally consistent
    pub fn validate(&self) -> Result<(), ValidatorError> {
        for element in Element::ALL {
            let weight = self.weights.weight(element);
            if weight > WEIGHT_TOTAL {
                return Err(ValidatorError::Config(format!(
                    "Weight for {} is {} but may not exceed {}",
                    element, weight, WEIGHT_TOTAL
                )));
            }
        }

        let total = self.weights.total();
        if total != u64::from(WEIGHT_TOTAL) {
            return Err(ValidatorError::Config(format!(
                "Completeness weights must sum to {} (got {})",
                WEIGHT_TOTAL, total
            )));
        }

        let StrengthThresholds {
            strong_confidence,
            moderate_confidence,
            strong_kind,
        } = &self.strength;

        for (name, value) in [
            ("strong_confidence", *strong_confidence),
            ("moderate_confidence", *moderate_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidatorError::Config(format!(
                    "{} {} is outside [0.0, 1.0]",
                    name, value
                )));
            }
        }

        if moderate_confidence > strong_confidence {
            return Err(ValidatorError::Config(format!(
                "moderate_confidence {} must not exceed strong_confidence {}",
                moderate_confidence, strong_confidence
            )));
        }

        if strong_kind.is_empty() {
            return Err(ValidatorError::Config(
                "strong_kind must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
