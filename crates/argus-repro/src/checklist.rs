//! Reproducibility checklist generation
//!
//! The checklist is derived purely from an argument's evidence, warrant and
//! limitations. Open items are things a reviewer should verify; flagged
//! items point at something the argument is missing.

use argus_domain::Argument;
use std::fmt;

/// Number of warrant characters quoted in the checklist
pub const WARRANT_PREVIEW_CHARS: usize = 50;

/// Whether a checklist item is a task or a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Something to verify, rendered as `[ ]`
    Open,

    /// Something missing, rendered as `[!]`
    Flagged,
}

impl ItemStatus {
    /// Checkbox marker for this status
    pub fn marker(&self) -> &'static str {
        match self {
            ItemStatus::Open => "[ ]",
            ItemStatus::Flagged => "[!]",
        }
    }
}

/// A single line of the reproducibility checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Task or warning
    pub status: ItemStatus,

    /// Item text, without the marker
    pub text: String,
}

impl ChecklistItem {
    fn open(text: impl Into<String>) -> Self {
        Self {
            status: ItemStatus::Open,
            text: text.into(),
        }
    }

    fn flagged(text: impl Into<String>) -> Self {
        Self {
            status: ItemStatus::Flagged,
            text: text.into(),
        }
    }

    /// Whether the item flags a gap
    pub fn is_flagged(&self) -> bool {
        self.status == ItemStatus::Flagged
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.marker(), self.text)
    }
}

/// Build the typed checklist for an argument
///
/// Items appear in a fixed order: two per piece of evidence (or one flag
/// when there is none), one for the warrant, one for the limitations.
pub fn checklist_items(argument: &Argument) -> Vec<ChecklistItem> {
    let mut items = Vec::with_capacity(argument.evidence.len() * 2 + 2);

    if argument.has_evidence() {
        for (idx, ev) in argument.evidence.iter().enumerate() {
            let n = idx + 1;
            items.push(ChecklistItem::open(format!(
                "Verify source availability for Evidence #{}: {}",
                n,
                ev.source().unwrap_or("No source listed")
            )));
            items.push(ChecklistItem::open(format!(
                "Audit data processing steps for Evidence #{}",
                n
            )));
        }
    } else {
        items.push(ChecklistItem::flagged("No evidence provided to verify"));
    }

    if argument.has_warrant() {
        let preview: String = argument.warrant.chars().take(WARRANT_PREVIEW_CHARS).collect();
        items.push(ChecklistItem::open(format!("Verify warrant logic: {}...", preview)));
    } else {
        items.push(ChecklistItem::flagged("Missing Warrant"));
    }

    if argument.has_limitations() {
        items.push(ChecklistItem::open(
            "Confirm all listed limitations are addressed in discussion",
        ));
    } else {
        items.push(ChecklistItem::flagged("No limitations disclosed"));
    }

    items
}

/// Build the reproducibility checklist for an argument as display lines
///
/// # Examples
///
/// ```
/// use argus_domain::Argument;
/// use argus_repro::generate_checklist;
///
/// let checklist = generate_checklist(&Argument::new("Claim").with_warrant("Warrant"));
/// assert_eq!(
///     checklist,
///     vec![
///         "[!] No evidence provided to verify",
///         "[ ] Verify warrant logic: Warrant...",
///         "[!] No limitations disclosed",
///     ]
/// );
/// ```
pub fn generate_checklist(argument: &Argument) -> Vec<String> {
    checklist_items(argument)
        .iter()
        .map(ToString::to_string)
        .collect()
}
