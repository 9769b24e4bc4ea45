//! Path management for the budget manager
//!
//! All state lives in a single CSV file under a `data/` directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (if given)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Name of the data directory below the base directory
pub const DATA_DIR_NAME: &str = "data";

/// Name of the transactions ledger file
pub const TRANSACTIONS_FILE_NAME: &str = "transactions.csv";

/// Manages all paths used by the budget manager
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory; the data directory is created below it
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from an optional override, falling back to the
    /// current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn resolve(base_override: Option<PathBuf>) -> Result<Self, BudgetError> {
        let base_dir = match base_override {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                BudgetError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR_NAME)
    }

    /// Get the path to transactions.csv
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join(TRANSACTIONS_FILE_NAME)
    }
}
