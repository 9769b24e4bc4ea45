//! Budget Manager - personal finance tracker backed by a CSV ledger
//!
//! This library records income and expense transactions in a flat CSV file
//! and derives simple reports from them: totals, spending per category,
//! monthly breakdowns and a monthly spending-health label.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and logging setup
//! - `error`: Custom error types
//! - `models`: Transactions, kinds and category vocabularies
//! - `storage`: Append-only CSV ledger
//! - `reports`: Pure aggregations over a ledger snapshot
//! - `display`: Table formatting for terminal output
//! - `cli`: Interactive menu and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_manager::config::BudgetPaths;
//! use budget_manager::reports::summary_totals;
//! use budget_manager::storage::TransactionStore;
//!
//! let paths = BudgetPaths::resolve(None)?;
//! let store = TransactionStore::from_paths(&paths);
//! let totals = summary_totals(&store.read_all()?);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
