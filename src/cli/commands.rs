//! Report and transaction commands
//!
//! Shared by the interactive menu and the one-shot subcommands. Every
//! function goes through the store, so the ledger is initialized before
//! each read or append.

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_transaction_table;
use crate::error::BudgetResult;
use crate::models::{parse_amount, parse_date, Category, Transaction, TransactionKind};
use crate::reports::{summary_totals, CategoryReport, HealthReport, MonthlyReport};
use crate::storage::TransactionStore;

/// Message shown by every report when the ledger has no rows
pub const EMPTY_LEDGER_MESSAGE: &str = "No transactions found yet. Add some!\n";

/// Arguments for adding a transaction without prompts
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Transaction type: income or expense
    #[arg(short, long)]
    pub kind: String,
    /// Category name (e.g. "groceries", "dine out", "salary")
    #[arg(short, long)]
    pub category: String,
    /// Amount (e.g. 25.50)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Notes
    #[arg(long, default_value = "")]
    pub description: String,
}

impl AddArgs {
    /// Validate the arguments into a transaction
    pub fn into_transaction(self, today: NaiveDate) -> BudgetResult<Transaction> {
        let date = match self.date.as_deref() {
            Some(s) => parse_date(s)?,
            None => today,
        };
        let kind: TransactionKind = self.kind.parse()?;
        let category: Category = self.category.parse()?;
        let amount = parse_amount(&self.amount)?;

        let txn = Transaction::new(date, kind, category, amount, self.description.trim());
        txn.validate()?;
        Ok(txn)
    }
}

/// Append a transaction and return a confirmation line
pub fn add_transaction(store: &TransactionStore, txn: &Transaction) -> BudgetResult<String> {
    store.append(txn)?;
    Ok(format!("Transaction added successfully: {}\n", txn))
}

/// Render every transaction
pub fn render_all(store: &TransactionStore) -> BudgetResult<String> {
    let transactions = store.read_all()?;
    Ok(format_transaction_table(&transactions))
}

/// Render spending by category
pub fn render_categories(store: &TransactionStore) -> BudgetResult<String> {
    let transactions = store.read_all()?;
    if transactions.is_empty() {
        return Ok(EMPTY_LEDGER_MESSAGE.to_string());
    }
    Ok(CategoryReport::generate(&transactions).format_terminal())
}

/// Render overall totals
pub fn render_summary(store: &TransactionStore) -> BudgetResult<String> {
    let transactions = store.read_all()?;
    if transactions.is_empty() {
        return Ok(EMPTY_LEDGER_MESSAGE.to_string());
    }
    Ok(summary_totals(&transactions).format_terminal())
}

/// Render monthly statistics
pub fn render_monthly(store: &TransactionStore) -> BudgetResult<String> {
    let transactions = store.read_all()?;
    if transactions.is_empty() {
        return Ok(EMPTY_LEDGER_MESSAGE.to_string());
    }
    Ok(MonthlyReport::generate(&transactions).format_terminal())
}

/// Render the monthly spending evaluation
pub fn render_health(store: &TransactionStore) -> BudgetResult<String> {
    let transactions = store.read_all()?;
    if transactions.is_empty() {
        return Ok(EMPTY_LEDGER_MESSAGE.to_string());
    }
    Ok(HealthReport::generate(&transactions).format_terminal())
}
