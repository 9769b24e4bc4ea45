//! Transaction model
//!
//! A transaction is one line of the ledger: a dated income or expense with a
//! category, an amount and free-text notes. Transactions are never edited
//! once written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::{Category, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use super::money::format_amount;

/// Date format used in the ledger and at the prompt
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The category vocabulary for this kind, in menu order
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Income => INCOME_CATEGORIES,
            Self::Expense => EXPENSE_CATEGORIES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TransactionValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// A single ledger entry
///
/// Field order matches the column order of the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense (stored in the `type` column)
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category from the vocabulary of `kind`
    pub category: Category,

    /// Amount, entered as a positive value by convention
    pub amount: f64,

    /// Notes
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: Category,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            category,
            amount,
            description: description.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The `YYYY-MM` key used for monthly grouping
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.category.belongs_to(self.kind) {
            return Err(TransactionValidationError::CategoryMismatch {
                kind: self.kind,
                category: self.category,
            });
        }

        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.category,
            format_amount(self.amount)
        )
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, TransactionValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| TransactionValidationError::InvalidDate(s.to_string()))
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    InvalidDate(String),
    UnknownKind(String),
    CategoryMismatch {
        kind: TransactionKind,
        category: Category,
    },
    NonFiniteAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => {
                write!(f, "Invalid date '{}', expected YYYY-MM-DD like 2025-06-01", s)
            }
            Self::UnknownKind(s) => {
                write!(f, "Unknown transaction type '{}', expected income or expense", s)
            }
            Self::CategoryMismatch { kind, category } => {
                write!(f, "Category '{}' is not valid for {} transactions", category, kind)
            }
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

impl From<TransactionValidationError> for crate::error::BudgetError {
    fn from(err: TransactionValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
