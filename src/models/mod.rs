//! Core data models for the budget manager
//!
//! This module contains the data structures that represent the ledger:
//! transactions, their kind, and the category vocabularies.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{Category, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use money::{format_amount, format_number, parse_amount};
pub use transaction::{parse_date, Transaction, TransactionKind, DATE_FORMAT};
