//! Checklist command implementation.

use crate::cli::ChecklistArgs;
use crate::document::load_argument;
use crate::error::Result;
use crate::output::Formatter;
use argus_repro::checklist_items;

/// Execute the checklist command.
pub fn execute_checklist(args: ChecklistArgs, formatter: &Formatter) -> Result<()> {
    let argument = load_argument(&args.file)?;
    let items = checklist_items(&argument);

    let flagged = items.iter().filter(|item| item.is_flagged()).count();
    tracing::debug!(items = items.len(), flagged, "Generated checklist");

    println!("{}", formatter.format_checklist(&items)?);
    Ok(())
}
