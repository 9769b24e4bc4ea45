//! Storage layer for the budget manager
//!
//! Provides an append-only CSV ledger with automatic directory and header
//! creation.

pub mod file_io;
pub mod init;
pub mod transactions;

pub use file_io::{append_csv, read_csv};
pub use init::{initialize_ledger, LEDGER_HEADER};
pub use transactions::TransactionStore;
