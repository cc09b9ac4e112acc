use std::path::Path;

use crate::core::types::Pairing;
use crate::export::{write_atomically, ExportError};
use crate::utils::validation::{FIELD_SEPARATOR, PENDING_TOKEN, SIDE_SEPARATOR};

/// Format one pairing as a pending ledger line
#[must_use]
pub fn format_pending_line(pairing: &Pairing) -> String {
    let placeholder = format!("{PENDING_TOKEN}{SIDE_SEPARATOR}{PENDING_TOKEN}");
    format!(
        "{}{SIDE_SEPARATOR}{}{FIELD_SEPARATOR}{placeholder}{FIELD_SEPARATOR}{placeholder}",
        pairing.home, pairing.away
    )
}

/// Format a full round, one pending line per pairing
#[must_use]
pub fn format_pending_round(pairings: &[Pairing]) -> String {
    pairings
        .iter()
        .map(|pairing| format_pending_line(pairing) + "\n")
        .collect()
}

/// Write the pairings as the next round's file, replacing any existing content
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be written.
pub fn write_pending_round(path: &Path, pairings: &[Pairing]) -> Result<(), ExportError> {
    write_atomically(path, format_pending_round(pairings).as_bytes())
}
