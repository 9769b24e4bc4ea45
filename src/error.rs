//! Custom error types for the budget manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget manager operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A stored row could not be decoded into a transaction
    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Validation errors for user input and records
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BudgetError {
    /// Create a parse error for a given line of the data file
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e.to_string()),
            csv::ErrorKind::Deserialize { err, .. } => Self::parse(line, err.to_string()),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::parse(
                line,
                format!("expected {} columns, found {}", expected_len, len),
            ),
            csv::ErrorKind::Utf8 { err, .. } => Self::parse(line, err.to_string()),
            other => Self::parse(line, format!("{:?}", other)),
        }
    }
}

/// Result type alias for budget manager operations
pub type BudgetResult<T> = Result<T, BudgetError>;
