//! Transaction display formatting
//!
//! Renders the ledger as a fixed-width table.

use crate::models::{format_amount, Transaction, DATE_FORMAT};

use super::report::{separator, truncate};

const DATE_WIDTH: usize = 12;
const TYPE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 13;
const AMOUNT_WIDTH: usize = 14;
const DESCRIPTION_WIDTH: usize = 30;

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:<dw$}{:<tw$}{:<cw$}{:<aw$}{}",
        txn.date.format(DATE_FORMAT).to_string(),
        txn.kind.as_str(),
        txn.category.name(),
        format_amount(txn.amount),
        truncate(&txn.description, DESCRIPTION_WIDTH),
        dw = DATE_WIDTH,
        tw = TYPE_WIDTH,
        cw = CATEGORY_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}

/// Format all transactions as a table, in ledger order
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("All transactions:\n\n");
    output.push_str(&format!(
        "{:<dw$}{:<tw$}{:<cw$}{:<aw$}{}\n",
        "date",
        "type",
        "category",
        "amount",
        "description",
        dw = DATE_WIDTH,
        tw = TYPE_WIDTH,
        cw = CATEGORY_WIDTH,
        aw = AMOUNT_WIDTH,
    ));
    output.push_str(&separator(
        DATE_WIDTH + TYPE_WIDTH + CATEGORY_WIDTH + AMOUNT_WIDTH + DESCRIPTION_WIDTH,
    ));
    output.push('\n');

    for txn in transactions {
        output.push_str(format_transaction_row(txn).trim_end());
        output.push('\n');
    }

    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionKind};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            TransactionKind::Expense,
            Category::DineOut,
            1250.0,
            "team dinner",
        )
    }

    #[test]
    fn test_row_columns() {
        let row = format_transaction_row(&sample());
        assert!(row.starts_with("2025-06-05  expense   dine out     $1,250.00"));
        assert!(row.ends_with("team dinner"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[]), "No transactions found yet.\n");
    }

    #[test]
    fn test_table_lists_every_row() {
        let mut second = sample();
        second.description = "x".repeat(60);
        let output = format_transaction_table(&[sample(), second]);

        assert!(output.contains("date        type      category"));
        assert!(output.contains("team dinner"));
        assert!(output.contains(&format!("{}...", "x".repeat(27))));
        assert!(output.contains("2 transaction(s)"));
    }
}
