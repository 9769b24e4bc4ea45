//! Transaction store backed by transactions.csv
//!
//! The store is append-only: records are written once and read back in
//! insertion order. There is no locking; a single writer is assumed.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::Transaction;

use super::file_io::{append_csv, read_csv};
use super::init::{initialize_ledger, LEDGER_HEADER};

/// Append-only repository for transactions
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store for the given ledger file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default ledger location for `paths`
    pub fn from_paths(paths: &BudgetPaths) -> Self {
        Self::new(paths.transactions_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory and header row if missing. Safe to call
    /// before every operation.
    pub fn ensure_initialized(&self) -> Result<(), BudgetError> {
        initialize_ledger(&self.path)?;
        Ok(())
    }

    /// Append a transaction as the last line of the ledger
    ///
    /// The record is validated first; a category outside the vocabulary of
    /// its kind is rejected without touching the file.
    pub fn append(&self, txn: &Transaction) -> Result<(), BudgetError> {
        txn.validate()?;
        self.ensure_initialized()?;

        append_csv(&self.path, txn)?;
        debug!(transaction = %txn, "appended transaction");
        Ok(())
    }

    /// Read every transaction in file order
    ///
    /// Fails on the first row that cannot be decoded; no partial result is
    /// returned.
    pub fn read_all(&self) -> Result<Vec<Transaction>, BudgetError> {
        self.ensure_initialized()?;

        let transactions: Vec<Transaction> = read_csv(&self.path, LEDGER_HEADER)?;
        debug!(count = transactions.len(), "read transactions");
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionKind};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path());
        let store = TransactionStore::from_paths(&paths);
        (temp_dir, store)
    }

    fn txn(day: u32, kind: TransactionKind, category: Category, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            kind,
            category,
            amount,
            "",
        )
    }

    #[test]
    fn test_read_fresh_store_is_empty() {
        let (temp_dir, store) = create_test_store();

        assert!(store.read_all().unwrap().is_empty());
        assert!(temp_dir.path().join("data").join("transactions.csv").exists());
    }

    #[test]
    fn test_append_then_read_returns_record_last() {
        let (_temp_dir, store) = create_test_store();

        store
            .append(&txn(1, TransactionKind::Income, Category::Salary, 3000.0))
            .unwrap();

        let mut latest = txn(5, TransactionKind::Expense, Category::DineOut, 42.37);
        latest.description = "pizza, with friends".to_string();
        store.append(&latest).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);

        let last = all.last().unwrap();
        assert_eq!(last.date, latest.date);
        assert_eq!(last.kind, TransactionKind::Expense);
        assert_eq!(last.category, Category::DineOut);
        assert!((last.amount - 42.37).abs() < 1e-9);
        assert_eq!(last.description, "pizza, with friends");
    }

    #[test]
    fn test_read_preserves_insertion_order_and_duplicates() {
        let (_temp_dir, store) = create_test_store();
        let later = txn(20, TransactionKind::Expense, Category::Transport, 15.0);
        let earlier = txn(2, TransactionKind::Expense, Category::Transport, 15.0);

        store.append(&later).unwrap();
        store.append(&earlier).unwrap();
        store.append(&earlier).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all, vec![later, earlier.clone(), earlier]);
    }

    #[test]
    fn test_append_rejects_category_mismatch() {
        let (_temp_dir, store) = create_test_store();

        let bad = txn(1, TransactionKind::Income, Category::Housing, 10.0);
        let err = store.append(&bad).unwrap_err();
        assert!(err.is_validation());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_initialized_keeps_data() {
        let (_temp_dir, store) = create_test_store();
        store
            .append(&txn(1, TransactionKind::Income, Category::Bonuses, 250.0))
            .unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        store.ensure_initialized().unwrap();
        store.ensure_initialized().unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
        assert_eq!(before.matches("date,type").count(), 1);
    }

    #[test]
    fn test_reads_rows_written_by_hand() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_initialized().unwrap();
        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("2025-06-01,income,salary,3000.0,\n");
        content.push_str("2025-06-10,expense,dine out,18.5,\"lunch, downtown\"\n");
        fs::write(store.path(), content).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].category, Category::DineOut);
        assert_eq!(all[1].description, "lunch, downtown");
    }

    #[test]
    fn test_padded_header_keeps_descriptions() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "date,type,category,amount,description \n2025-06-01,expense,groceries,10,weekly shop\n",
        )
        .unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "weekly shop");
    }

    #[test]
    fn test_unpadded_date_groups_by_padded_month() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_initialized().unwrap();
        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("2025-6-1,expense,groceries,10,\n");
        fs::write(store.path(), content).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all[0].year_month(), "2025-06");
    }

    #[test]
    fn test_malformed_amount_is_parse_error() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_initialized().unwrap();
        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("2025-06-01,income,salary,lots,\n");
        fs::write(store.path(), content).unwrap();

        let err = store.read_all().unwrap_err();
        assert!(matches!(err, BudgetError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_missing_column_is_parse_error() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_initialized().unwrap();
        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("2025-06-01,income,salary\n");
        fs::write(store.path(), content).unwrap();

        assert!(store.read_all().unwrap_err().is_parse());
    }

    #[test]
    fn test_invalid_date_is_parse_error() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_initialized().unwrap();
        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("2025-13-01,expense,groceries,10,\n");
        fs::write(store.path(), content).unwrap();

        assert!(store.read_all().unwrap_err().is_parse());
    }
}
