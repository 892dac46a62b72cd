//! Claim module - a standalone assertion with a confidence

use serde::{Deserialize, Serialize};

/// A specific assertion that requires evidence
///
/// Unlike [`Evidence`](crate::Evidence), the confidence here is not range
/// checked; it is carried as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// The assertion itself
    pub statement: String,

    /// Confidence in the assertion (default 1.0)
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

impl Claim {
    /// Create a claim with full confidence
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            confidence: default_confidence(),
        }
    }

    /// Set the confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_defaults() {
        let claim = Claim::new("LLMs are useful");
        assert_eq!(claim.statement, "LLMs are useful");
        assert_eq!(claim.confidence, 1.0);
    }

    #[test]
    fn test_claim_confidence_unchecked() {
        let claim = Claim::new("Overconfident").with_confidence(1.7);
        assert_eq!(claim.confidence, 1.7);
    }
}
