//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::document::load_argument;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use argus_validator::{ValidationConfig, ValidationResult, Validator};
use tracing::info;

/// Execute the validate command.
pub fn execute_validate(
    args: ValidateArgs,
    config: &ValidationConfig,
    formatter: &Formatter,
) -> Result<()> {
    let result = run_validate(&args, config)?;
    println!("{}", formatter.format_validation(&result)?);

    check_minimum(&result, args.min_score)
}

/// Load the argument named by `args` and validate it.
pub fn run_validate(args: &ValidateArgs, config: &ValidationConfig) -> Result<ValidationResult> {
    let argument = load_argument(&args.file)?;
    let validator = Validator::new(config.clone())?;
    let result = validator.validate(&argument);

    info!(
        file = %args.file.display(),
        quality_score = result.quality_score,
        evidence_strength = result.evidence_strength.as_str(),
        "Validated argument"
    );
    Ok(result)
}

/// Fail when the score is below the requested minimum.
fn check_minimum(result: &ValidationResult, min_score: Option<f64>) -> Result<()> {
    match min_score {
        Some(minimum) if !(0.0..=100.0).contains(&minimum) => Err(CliError::InvalidInput(
            format!("--min-score must be between 0 and 100 (got {})", minimum),
        )),
        Some(minimum) if result.quality_score < minimum => Err(CliError::BelowThreshold {
            score: result.quality_score,
            minimum,
        }),
        _ => Ok(()),
    }
}
