//! Scoring functions
//!
//! Pure functions over the domain model: a weighted completeness score and
//! an evidence strength heuristic. Neither looks at the text of a claim or
//! piece of evidence.

use crate::config::{CompletenessWeights, StrengthThresholds};
use argus_domain::{Argument, Element, Evidence, EvidenceStrength};

/// Completeness score in [0, 100] using the default weights
///
/// Each structural element contributes its full weight when present and
/// nothing otherwise. Content, counts and confidences play no part.
///
/// # Examples
///
/// ```
/// use argus_domain::Argument;
/// use argus_validator::completeness_score;
///
/// assert_eq!(completeness_score(&Argument::new("Claim")), 20.0);
/// assert_eq!(completeness_score(&Argument::default()), 0.0);
/// ```
pub fn completeness_score(argument: &Argument) -> f64 {
    completeness_score_with(argument, &CompletenessWeights::default())
}

/// Completeness score using the given weights
pub fn completeness_score_with(argument: &Argument, weights: &CompletenessWeights) -> f64 {
    let score: u64 = Element::ALL
        .iter()
        .filter(|element| argument.has(**element))
        .map(|element| u64::from(weights.weight(*element)))
        .sum();

    score as f64
}

/// Rate a body of evidence using the default thresholds
///
/// - No evidence is weak.
/// - Average confidence above 0.8 with at least one experimental item is
///   strong.
/// - Otherwise an average above 0.5 is moderate, and anything else weak.
pub fn evidence_strength(evidence: &[Evidence]) -> EvidenceStrength {
    evidence_strength_with(evidence, &StrengthThresholds::default())
}

/// Rate a body of evidence using the given thresholds
pub fn evidence_strength_with(
    evidence: &[Evidence],
    thresholds: &StrengthThresholds,
) -> EvidenceStrength {
    let Some(avg) = average_confidence(evidence) else {
        return EvidenceStrength::Weak;
    };

    let has_strong_kind = evidence.iter().any(|e| e.kind() == thresholds.strong_kind);

    if avg > thresholds.strong_confidence && has_strong_kind {
        EvidenceStrength::Strong
    } else if avg > thresholds.moderate_confidence {
        EvidenceStrength::Moderate
    } else {
        EvidenceStrength::Weak
    }
}

/// Arithmetic mean of confidences, `None` when there is no evidence
pub fn average_confidence(evidence: &[Evidence]) -> Option<f64> {
    if evidence.is_empty() {
        return None;
    }

    let total: f64 = evidence.iter().map(Evidence::confidence).sum();
    Some(total / evidence.len() as f64)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn argument_from_mask(mask: [bool; 5]) -> Argument {
        let mut arg = Argument::default();
        if mask[0] {
            arg.claim = "Claim".to_string();
        }
        if mask[1] {
            arg.evidence.push(Evidence::new("Ev"));
        }
        if mask[2] {
            arg.warrant = "Warrant".to_string();
        }
        if mask[3] {
            arg.counterarguments.push("Counter".into());
        }
        if mask[4] {
            arg.limitations.push("Limit".to_string());
        }
        arg
    }

    proptest! {
        /// Property: score is a sum of a subset of the weights
        #[test]
        fn test_score_is_weight_subset_sum(mask in any::<[bool; 5]>()) {
            let weights = [20.0, 30.0, 20.0, 15.0, 15.0];
            let expected: f64 = mask
                .iter()
                .zip(weights)
                .filter(|(present, _)| **present)
                .map(|(_, w)| w)
                .sum();

            let score = completeness_score(&argument_from_mask(mask));
            prop_assert_eq!(score, expected);
            prop_assert!((0.0..=100.0).contains(&score));
        }

        /// Property: adding an element never lowers the score
        #[test]
        fn test_score_monotonic(mask in any::<[bool; 5]>(), idx in 0usize..5) {
            let before = completeness_score(&argument_from_mask(mask));
            let mut more = mask;
            more[idx] = true;
            let after = completeness_score(&argument_from_mask(more));
            prop_assert!(after >= before);
        }

        /// Property: uniform confidence without experimental evidence never rates strong
        #[test]
        fn test_no_experimental_never_strong(c in 0.0f64..=1.0, n in 1usize..10) {
            let evidence: Vec<Evidence> = (0..n)
                .map(|_| Evidence::new("ev").with_confidence(c).unwrap())
                .collect();
            prop_assert_ne!(evidence_strength(&evidence), EvidenceStrength::Strong);
        }
    }
}
