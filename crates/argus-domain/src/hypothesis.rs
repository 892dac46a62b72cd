//! Hypothesis module

use serde::{Deserialize, Serialize};

/// A proposed explanation, made on limited evidence, used as a starting
/// point for further investigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// The proposed explanation
    pub statement: String,

    /// Conditions taken for granted
    #[serde(default)]
    pub assumptions: Vec<String>,

    /// Observable consequences that would support or refute it
    #[serde(default)]
    pub testable_predictions: Vec<String>,
}

impl Hypothesis {
    /// Create a hypothesis with no assumptions or predictions
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            ..Default::default()
        }
    }

    /// Append an assumption
    pub fn with_assumption(mut self, assumption: impl Into<String>) -> Self {
        self.assumptions.push(assumption.into());
        self
    }

    /// Append a testable prediction
    pub fn with_prediction(mut self, prediction: impl Into<String>) -> Self {
        self.testable_predictions.push(prediction.into());
        self
    }
}
