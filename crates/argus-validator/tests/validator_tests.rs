//! Integration tests for argus-validator
//!
//! These exercise the validator end to end over arguments built the way
//! callers build them.

use argus_domain::{Argument, Counterargument, Element, Evidence, EvidenceStrength};
use argus_validator::{completeness_score, ValidationConfig, Validator};

#[test]
fn test_validator_perfect_score() {
    let arg = Argument::new("Claim")
        .with_evidence(
            Evidence::new("Ev")
                .with_kind("experimental")
                .with_confidence(0.9)
                .unwrap(),
        )
        .with_warrant("Warrant")
        .with_counterargument("Counter")
        .with_limitation("Limit");

    let result = Validator::default_config().validate(&arg);

    assert_eq!(result.quality_score, 100.0);
    assert_eq!(result.evidence_strength, EvidenceStrength::Strong);
    assert_eq!(result.missing_elements.len(), 0);
}

#[test]
fn test_validator_incomplete() {
    let result = Validator::default_config().validate(&Argument::new("Empty Claim"));

    assert_eq!(result.quality_score, 20.0);
    assert!(result.missing_elements.contains(&Element::Evidence));
    assert_eq!(result.evidence_strength, EvidenceStrength::Weak);
}

#[test]
fn test_evidence_strength_logic() {
    let arg = Argument::new("Claim").with_evidence(
        Evidence::new("Ev")
            .with_kind("anecdotal")
            .with_confidence(0.6)
            .unwrap(),
    );

    let result = Validator::default_config().validate(&arg);
    assert_eq!(result.evidence_strength, EvidenceStrength::Moderate);
}

#[test]
fn test_finetuning_study() {
    let arg = Argument::new("Fine-tuning LLMs on domain data improves task accuracy by 15%")
        .with_evidence(
            Evidence::new("Controlled A/B test on 10k samples")
                .with_kind("experimental")
                .with_source("experiments/finetune_results.csv")
                .with_sample_size(10_000)
                .with_confidence(0.95)
                .unwrap(),
        )
        .with_warrant("Consistent improvement across 5 different domains and 3 model sizes")
        .with_counterargument("Improvement may be due to overfitting")
        .with_counterargument(
            Counterargument::new("Sample size may be insufficient for generalization")
                .with_strength("weak"),
        )
        .with_limitation("Limited to English language")
        .with_limitation("Tested only on classification tasks");

    let result = Validator::default_config().validate(&arg);

    assert_eq!(result.quality_score, 100.0);
    assert_eq!(result.evidence_strength, EvidenceStrength::Strong);
    assert!(result.is_complete());
}

#[test]
fn test_validator_matches_free_function() {
    let arg = Argument::new("Claim").with_warrant("Warrant");
    let result = Validator::default_config().validate(&arg);
    assert_eq!(result.quality_score, completeness_score(&arg));
    assert_eq!(result.quality_score, 40.0);
}

#[test]
fn test_validation_is_repeatable() {
    let validator = Validator::default_config();
    let arg = Argument::new("Claim").with_limitation("Limit");
    assert_eq!(validator.validate(&arg), validator.validate(&arg));
}

#[test]
fn test_validator_from_toml_config() {
    let config = ValidationConfig::from_toml_str(
        r#"
        [weights]
        claim = 0
        evidence = 40
        warrant = 30

        [strength]
        moderate_confidence = 0.7
        "#,
    )
    .unwrap();
    let validator = Validator::new(config).unwrap();

    let arg = Argument::new("Claim").with_evidence(
        Evidence::new("Ev").with_confidence(0.6).unwrap(),
    );
    let result = validator.validate(&arg);

    assert_eq!(result.quality_score, 40.0);
    assert_eq!(result.evidence_strength, EvidenceStrength::Weak);
}

#[test]
fn test_argument_from_json_document() {
    let arg: Argument = serde_json::from_str(
        r#"{
            "claim": "Claim",
            "evidence": [{"description": "Ev", "type": "experimental", "confidence": 0.85}],
            "warrant": "Warrant",
            "counterarguments": ["Counter"]
        }"#,
    )
    .unwrap();

    let result = Validator::default_config().validate(&arg);
    assert_eq!(result.quality_score, 85.0);
    assert_eq!(result.evidence_strength, EvidenceStrength::Strong);
    assert_eq!(result.missing_elements, vec![Element::Limitations]);
}
