//! Evidence strength buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating of a body of evidence
///
/// Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceStrength {
    /// Little or low-confidence evidence
    Weak,

    /// Reasonably confident evidence
    Moderate,

    /// Highly confident evidence including experimental results
    Strong,
}

impl EvidenceStrength {
    /// Get the strength name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceStrength::Weak => "weak",
            EvidenceStrength::Moderate => "moderate",
            EvidenceStrength::Strong => "strong",
        }
    }

    /// Parse a strength from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weak" => Some(EvidenceStrength::Weak),
            "moderate" => Some(EvidenceStrength::Moderate),
            "strong" => Some(EvidenceStrength::Strong),
            _ => None,
        }
    }
}

impl fmt::Display for EvidenceStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EvidenceStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid evidence strength: {}", s))
    }
}
