//! Evidence module - observations that support a claim

use crate::{DomainError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Evidence kind assigned when none is given
pub const DEFAULT_KIND: &str = "general";

/// Evidence kind that counts toward a "strong" rating
pub const EXPERIMENTAL_KIND: &str = "experimental";

/// A piece of evidence supporting a claim
///
/// Confidence is checked when the evidence is built and cannot be changed
/// afterwards without going through the same check, so every `Evidence`
/// value holds a confidence in [0.0, 1.0].
///
/// # Examples
///
/// ```
/// use argus_domain::Evidence;
///
/// let ev = Evidence::new("Controlled A/B test on 10k samples")
///     .with_kind("experimental")
///     .with_source("experiments/finetune_results.csv")
///     .with_confidence(0.95)
///     .unwrap();
/// assert_eq!(ev.confidence(), 0.95);
///
/// assert!(Evidence::new("Bad data").with_confidence(1.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EvidenceRecord")]
pub struct Evidence {
    description: String,

    #[serde(rename = "type")]
    kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,

    confidence: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    sample_size: Option<u64>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, Value>,
}

impl Evidence {
    /// Create evidence with full confidence and the general kind
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            kind: DEFAULT_KIND.to_string(),
            source: None,
            confidence: 1.0,
            sample_size: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Create evidence with an explicit confidence
    ///
    /// Fails with [`DomainError::InvalidArgument`] when `confidence` is
    /// outside [0.0, 1.0] (NaN included).
    pub fn with_confidence_of(description: impl Into<String>, confidence: f64) -> Result<Self> {
        Self::new(description).with_confidence(confidence)
    }

    /// Set the confidence, validating the range
    pub fn with_confidence(mut self, confidence: f64) -> Result<Self> {
        check_confidence(confidence)?;
        self.confidence = confidence;
        Ok(self)
    }

    /// Set the evidence kind (e.g. "experimental", "anecdotal")
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set where the evidence came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the number of samples behind the evidence
    pub fn with_sample_size(mut self, sample_size: u64) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// What the evidence is
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evidence kind; compared verbatim by the strength heuristic
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether this is experimental evidence (exact match)
    pub fn is_experimental(&self) -> bool {
        self.kind == EXPERIMENTAL_KIND
    }

    /// Source reference, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Confidence in [0.0, 1.0]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Sample size, if known
    pub fn sample_size(&self) -> Option<u64> {
        self.sample_size
    }

    /// Free-form metadata
    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }
}

fn check_confidence(confidence: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(DomainError::InvalidArgument(format!(
            "Confidence must be between 0.0 and 1.0 (got {})",
            confidence
        )));
    }
    Ok(())
}

/// Wire shape of [`Evidence`]; converted through the confidence check
#[derive(Deserialize)]
struct EvidenceRecord {
    description: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default = "default_confidence")]
    confidence: f64,
    #[serde(default)]
    sample_size: Option<u64>,
    #[serde(default)]
    metadata: BTreeMap<String, Value>,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

fn default_confidence() -> f64 {
    1.0
}

impl TryFrom<EvidenceRecord> for Evidence {
    type Error = DomainError;

    fn try_from(record: EvidenceRecord) -> Result<Self> {
        check_confidence(record.confidence)?;
        Ok(Self {
            description: record.description,
            kind: record.kind,
            source: record.source,
            confidence: record.confidence,
            sample_size: record.sample_size,
            metadata: record.metadata,
        })
    }
}

/// An ordered trail of evidence supporting a single point
///
/// Insertion order is significant. Each call to [`EvidenceChain::iter`]
/// starts a fresh traversal from the first item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceChain {
    items: Vec<Evidence>,
}

impl EvidenceChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append evidence to the end of the chain
    pub fn add(&mut self, evidence: Evidence) {
        self.items.push(evidence);
    }

    /// Number of items in the chain
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<&Evidence> {
        self.items.get(index)
    }

    /// Iterate over the chain in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Evidence> {
        self.items.iter()
    }

    /// Borrow the chain as a slice
    pub fn as_slice(&self) -> &[Evidence] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a EvidenceChain {
    type Item = &'a Evidence;
    type IntoIter = std::slice::Iter<'a, Evidence>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for EvidenceChain {
    type Item = Evidence;
    type IntoIter = std::vec::IntoIter<Evidence>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Evidence> for EvidenceChain {
    fn from_iter<I: IntoIterator<Item = Evidence>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Evidence> for EvidenceChain {
    fn extend<I: IntoIterator<Item = Evidence>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl From<EvidenceChain> for Vec<Evidence> {
    fn from(chain: EvidenceChain) -> Self {
        chain.items
    }
}
