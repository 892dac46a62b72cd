//! Integration tests for argus-repro
//!
//! These verify artifact export against a real filesystem.

use argus_domain::{Argument, Evidence, Hypothesis};
use argus_repro::{ExportError, ResearchArtifact, PACKAGE_README};

#[test]
fn test_markdown_generation() {
    let dir = tempfile::tempdir().unwrap();
    let arg = Argument::new("Test Claim")
        .with_evidence(Evidence::new("Data").with_source("file.csv"))
        .with_warrant("Logic");
    let artifact = ResearchArtifact::from_argument(arg);

    let output_file = dir.path().join("test_artifact.md");
    artifact.export_markdown(&output_file).unwrap();

    assert!(output_file.exists());
    let content = std::fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Test Claim"));
    assert!(content.contains("file.csv"));
    assert!(content.contains("Reproducibility Checklist"));
}

#[test]
fn test_checklist_generation_logic() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ResearchArtifact::from_argument(Argument::new("Empty"));

    let output_file = dir.path().join("empty.md");
    artifact.export_markdown(&output_file).unwrap();

    let content = std::fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("[!] No evidence provided"));
}

#[test]
fn test_write_package_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let package_dir = dir.path().join("nested").join("package");
    let artifact = ResearchArtifact::from_argument(Argument::new("Claim"))
        .with_hypothesis(Hypothesis::new("Hypothesis").with_assumption("Assumption"));

    let readme = artifact.write_package(&package_dir).unwrap();

    assert_eq!(readme, package_dir.join(PACKAGE_README));
    let content = std::fs::read_to_string(&readme).unwrap();
    assert!(content.contains("## Hypothesis"));
    assert!(content.contains("## Core Argument"));
}

#[test]
fn test_write_package_into_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ResearchArtifact::from_argument(Argument::new("Claim"));

    artifact.write_package(dir.path()).unwrap();
    artifact.write_package(dir.path()).unwrap();

    assert!(dir.path().join(PACKAGE_README).exists());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ResearchArtifact::from_argument(Argument::new("Claim"));

    let result = artifact.export_markdown(dir.path().join("missing").join("out.md"));
    match result {
        Err(ExportError::Write { path, .. }) => assert!(path.ends_with("out.md")),
        other => panic!("Expected Write error, got {:?}", other),
    }
}
