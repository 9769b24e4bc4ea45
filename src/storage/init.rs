//! Storage initialization
//!
//! Creates the data directory and an empty ledger with its header row.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::BudgetError;

use super::file_io::write_header;

/// Column names of the ledger, in order
pub const LEDGER_HEADER: &[&str] = &["date", "type", "category", "amount", "description"];

/// Make sure the ledger exists and starts with a header row
///
/// Creates the parent directory when absent and writes the header when the
/// file is absent or empty. Existing content is never touched. Returns
/// `true` if a fresh ledger was written.
pub fn initialize_ledger(path: &Path) -> Result<bool, BudgetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                BudgetError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if !needs_initialization(path) {
        return Ok(false);
    }

    write_header(path, LEDGER_HEADER)?;
    info!(path = %path.display(), "created transactions file");
    Ok(true)
}

/// Check if the ledger is missing or empty
pub fn needs_initialization(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    }
}
