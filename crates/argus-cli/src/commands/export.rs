//! Export command implementation.

use crate::cli::ExportArgs;
use crate::document::load_document;
use crate::error::Result;
use crate::output::Formatter;
use std::path::PathBuf;

/// Execute the export command.
pub fn execute_export(args: ExportArgs, formatter: &Formatter) -> Result<()> {
    let written = run_export(&args)?;
    println!("{}", formatter.exported(&written));
    Ok(())
}

/// Export the document named by `args`, returning the file written.
pub fn run_export(args: &ExportArgs) -> Result<PathBuf> {
    let artifact = load_document(&args.file)?;

    if artifact.argument.is_none() && artifact.hypothesis.is_none() {
        tracing::warn!(file = %args.file.display(), "Artifact document is empty");
    }

    if args.package {
        Ok(artifact.write_package(&args.output)?)
    } else {
        artifact.export_markdown(&args.output)?;
        Ok(args.output.clone())
    }
}
