//! Argument module - the root aggregate of the domain model

use crate::{Element, Evidence};
use serde::{Deserialize, Serialize};

/// Strength assigned to a counterargument when none is given
pub const DEFAULT_COUNTER_STRENGTH: &str = "moderate";

/// An objection raised against a claim
///
/// `strength` is conventionally "weak", "moderate" or "strong" but is not
/// checked against that set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterargument {
    /// The objection
    pub statement: String,

    /// How serious the objection is
    #[serde(default = "default_strength")]
    pub strength: String,
}

fn default_strength() -> String {
    DEFAULT_COUNTER_STRENGTH.to_string()
}

impl Counterargument {
    /// Create a counterargument of moderate strength
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            strength: default_strength(),
        }
    }

    /// Set the strength label
    pub fn with_strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = strength.into();
        self
    }
}

/// A counterargument as recorded on an [`Argument`]
///
/// Callers may record a bare statement or a structured counterargument
/// carrying a strength. In documents a bare string maps to `PlainText`
/// and an object maps to `Structured`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CounterargumentEntry {
    /// Statement only
    PlainText(String),

    /// Statement with strength
    Structured(Counterargument),
}

impl CounterargumentEntry {
    /// The objection text
    pub fn statement(&self) -> &str {
        match self {
            CounterargumentEntry::PlainText(text) => text,
            CounterargumentEntry::Structured(counter) => &counter.statement,
        }
    }

    /// Strength label, for structured entries only
    pub fn strength(&self) -> Option<&str> {
        match self {
            CounterargumentEntry::PlainText(_) => None,
            CounterargumentEntry::Structured(counter) => Some(&counter.strength),
        }
    }
}

impl From<&str> for CounterargumentEntry {
    fn from(text: &str) -> Self {
        CounterargumentEntry::PlainText(text.to_string())
    }
}

impl From<String> for CounterargumentEntry {
    fn from(text: String) -> Self {
        CounterargumentEntry::PlainText(text)
    }
}

impl From<Counterargument> for CounterargumentEntry {
    fn from(counter: Counterargument) -> Self {
        CounterargumentEntry::Structured(counter)
    }
}

/// A response to a counterargument, optionally backed by evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rebuttal {
    /// The counterargument being answered
    pub counterargument: Counterargument,

    /// The answer
    pub response: String,

    /// Evidence backing the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

impl Rebuttal {
    /// Create a rebuttal without supporting evidence
    pub fn new(counterargument: Counterargument, response: impl Into<String>) -> Self {
        Self {
            counterargument,
            response: response.into(),
            evidence: None,
        }
    }

    /// Attach supporting evidence
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = Some(evidence);
        self
    }
}

/// A reasoned argument: a claim with everything offered for and against it
///
/// Every collection is owned by the argument and starts empty. Rebuttals are
/// recorded but play no part in scoring.
///
/// # Examples
///
/// ```
/// use argus_domain::{Argument, Evidence};
///
/// let arg = Argument::new("LLMs are useful")
///     .with_evidence(Evidence::new("Usage stats"))
///     .with_warrant("High adoption implies utility")
///     .with_limitation("Bias");
///
/// assert_eq!(arg.evidence.len(), 1);
/// assert_eq!(arg.limitations[0], "Bias");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// The assertion under argument
    pub claim: String,

    /// Supporting evidence, in order
    #[serde(default)]
    pub evidence: Vec<Evidence>,

    /// Justification connecting evidence to claim
    #[serde(default)]
    pub warrant: String,

    /// Objections raised against the claim
    #[serde(default)]
    pub counterarguments: Vec<CounterargumentEntry>,

    /// Responses to objections
    #[serde(default)]
    pub rebuttals: Vec<Rebuttal>,

    /// Disclosed limitations
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl Argument {
    /// Create an argument with only a claim
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            ..Default::default()
        }
    }

    /// Append evidence
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    /// Set the warrant
    pub fn with_warrant(mut self, warrant: impl Into<String>) -> Self {
        self.warrant = warrant.into();
        self
    }

    /// Append a counterargument (plain text or structured)
    pub fn with_counterargument(mut self, counter: impl Into<CounterargumentEntry>) -> Self {
        self.counterarguments.push(counter.into());
        self
    }

    /// Append a rebuttal
    pub fn with_rebuttal(mut self, rebuttal: Rebuttal) -> Self {
        self.rebuttals.push(rebuttal);
        self
    }

    /// Append a limitation
    pub fn with_limitation(mut self, limitation: impl Into<String>) -> Self {
        self.limitations.push(limitation.into());
        self
    }

    /// Whether the claim is non-empty
    pub fn has_claim(&self) -> bool {
        !self.claim.is_empty()
    }

    /// Whether any evidence is attached
    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }

    /// Whether the warrant is non-empty
    pub fn has_warrant(&self) -> bool {
        !self.warrant.is_empty()
    }

    /// Whether any counterargument is recorded
    pub fn has_counterarguments(&self) -> bool {
        !self.counterarguments.is_empty()
    }

    /// Whether any limitation is disclosed
    pub fn has_limitations(&self) -> bool {
        !self.limitations.is_empty()
    }

    /// Whether the given structural element is present
    pub fn has(&self, element: Element) -> bool {
        match element {
            Element::Claim => self.has_claim(),
            Element::Evidence => self.has_evidence(),
            Element::Warrant => self.has_warrant(),
            Element::Counterarguments => self.has_counterarguments(),
            Element::Limitations => self.has_limitations(),
        }
    }
}
