//! Structural elements of an argument

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five structural fields of an [`Argument`](crate::Argument)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// The assertion under argument
    Claim,

    /// Supporting evidence
    Evidence,

    /// Justification linking evidence to claim
    Warrant,

    /// Objections raised against the claim
    Counterarguments,

    /// Disclosed limitations
    Limitations,
}

impl Element {
    /// All elements, in declaration order
    pub const ALL: [Element; 5] = [
        Element::Claim,
        Element::Evidence,
        Element::Warrant,
        Element::Counterarguments,
        Element::Limitations,
    ];

    /// Get the element name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Claim => "claim",
            Element::Evidence => "evidence",
            Element::Warrant => "warrant",
            Element::Counterarguments => "counterarguments",
            Element::Limitations => "limitations",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
