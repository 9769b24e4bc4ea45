//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and reports as aligned
//! text tables.

pub mod report;
pub mod transaction;

pub use transaction::{format_transaction_row, format_transaction_table};
