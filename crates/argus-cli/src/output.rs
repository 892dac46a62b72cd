//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use argus_domain::EvidenceStrength;
use argus_repro::ChecklistItem;
use argus_validator::ValidationResult;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a validation result.
    pub fn format_validation(&self, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_validation_table(result)),
            OutputFormat::Quiet => Ok(format!("{}", result.quality_score)),
        }
    }

    fn format_validation_table(&self, result: &ValidationResult) -> String {
        let missing = if result.missing_elements.is_empty() {
            "-".to_string()
        } else {
            result
                .missing_elements
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record([
            "Quality Score".to_string(),
            format!("{:.1}/100", result.quality_score),
        ]);
        builder.push_record([
            "Evidence Strength".to_string(),
            self.colorize_strength(result.evidence_strength),
        ]);
        builder.push_record(["Missing Elements".to_string(), missing]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a reproducibility checklist.
    ///
    /// Quiet mode lists only the flagged items.
    pub fn format_checklist(&self, items: &[ChecklistItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let lines: Vec<String> = items.iter().map(ToString::to_string).collect();
                Ok(serde_json::to_string_pretty(&lines)?)
            }
            OutputFormat::Table => {
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| {
                        if item.is_flagged() {
                            self.colorize(&item.to_string(), "yellow")
                        } else {
                            item.to_string()
                        }
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(items
                .iter()
                .filter(|item| item.is_flagged())
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format an export result.
    pub fn exported(&self, path: &Path) -> String {
        match self.format {
            OutputFormat::Quiet => path.display().to_string(),
            _ => self.success(&format!("Artifact written to {}", path.display())),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    fn colorize_strength(&self, strength: EvidenceStrength) -> String {
        let color = match strength {
            EvidenceStrength::Strong => "green",
            EvidenceStrength::Moderate => "yellow",
            EvidenceStrength::Weak => "red",
        };
        self.colorize(strength.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_domain::Argument;
    use argus_repro::checklist_items;
    use argus_validator::Validator;

    fn incomplete_result() -> ValidationResult {
        Validator::default_config().validate(&Argument::new("Empty Claim"))
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_validation(&incomplete_result()).unwrap();
        assert!(output.contains("Quality Score"));
        assert!(output.contains("20.0/100"));
        assert!(output.contains("weak"));
        assert!(output.contains("warrant, counterarguments, limitations, evidence"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_validation(&incomplete_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["quality_score"], 20.0);
        assert_eq!(value["evidence_strength"], "weak");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_validation(&incomplete_result()).unwrap();
        assert_eq!(output, "20");
    }

    #[test]
    fn test_checklist_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let items = checklist_items(&Argument::new("Claim").with_limitation("Limit"));
        let output = formatter.format_checklist(&items).unwrap();
        assert_eq!(
            output,
            "[!] No evidence provided to verify\n\
             [!] Missing Warrant\n\
             [ ] Confirm all listed limitations are addressed in discussion"
        );
    }

    #[test]
    fn test_checklist_quiet_only_flagged() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let items = checklist_items(&Argument::new("Claim").with_limitation("Limit"));
        let output = formatter.format_checklist(&items).unwrap();
        assert!(!output.contains("Confirm all listed limitations"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_checklist_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let items = checklist_items(&Argument::default());
        let output = formatter.format_checklist(&items).unwrap();
        let lines: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(lines[0], "[!] No evidence provided to verify");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(
            formatter.exported(Path::new("out.md")),
            "✓ Artifact written to out.md"
        );
    }
}
