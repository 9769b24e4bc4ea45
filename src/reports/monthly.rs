//! Monthly statistics
//!
//! Transactions are grouped by their `YYYY-MM` key. Because the key is
//! zero-padded, lexicographic order on keys is chronological order. The key
//! is formatted from the parsed date, so a hand-edited `2025-6-1` lands in
//! `2025-06` alongside its padded neighbours.

use std::collections::BTreeMap;

use crate::display::report::separator;
use crate::models::{format_amount, Transaction, TransactionKind};

/// Income, expense and balance for a single month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expense: f64,
    /// `income - expense`
    pub balance: f64,
}

impl MonthlyTotals {
    pub fn new(income: f64, expense: f64) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Fold one transaction into the running totals
    fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expense += txn.amount,
        }
        self.balance = self.income - self.expense;
    }
}

/// Group transactions by year-month and total each group
pub fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<String, MonthlyTotals> {
    transactions
        .iter()
        .fold(BTreeMap::new(), |mut months, txn| {
            months
                .entry(txn.year_month())
                .or_insert_with(MonthlyTotals::default)
                .record(txn);
            months
        })
}

/// Monthly statistics report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub months: BTreeMap<String, MonthlyTotals>,
}

impl MonthlyReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self {
            months: monthly_totals(transactions),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Monthly statistics:\n\n");
        output.push_str(&format!(
            "{:<10}{:>16}{:>16}{:>16}\n",
            "month", "income", "expenses", "balance"
        ));
        output.push_str(&separator(58));
        output.push('\n');

        for (month, totals) in &self.months {
            output.push_str(&format!(
                "{:<10}{:>16}{:>16}{:>16}\n",
                month,
                format_amount(totals.income),
                format_amount(totals.expense),
                format_amount(totals.balance)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn txn(
        date: (i32, u32, u32),
        kind: TransactionKind,
        category: Category,
        amount: f64,
    ) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            kind,
            category,
            amount,
            "",
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(monthly_totals(&[]).is_empty());
    }

    #[test]
    fn test_june_scenario() {
        let records = vec![
            txn((2025, 6, 1), TransactionKind::Income, Category::Salary, 3000.0),
            txn((2025, 6, 5), TransactionKind::Expense, Category::Groceries, 200.0),
            txn((2025, 6, 10), TransactionKind::Expense, Category::Housing, 1200.0),
        ];

        let months = monthly_totals(&records);
        assert_eq!(months.len(), 1);
        assert_eq!(months["2025-06"], MonthlyTotals::new(3000.0, 1400.0));
        assert_eq!(months["2025-06"].balance, 1600.0);
    }

    #[test]
    fn test_keys_are_distinct_months_in_order() {
        let records = vec![
            txn((2025, 3, 15), TransactionKind::Expense, Category::Shopping, 10.0),
            txn((2024, 12, 31), TransactionKind::Income, Category::Bonuses, 500.0),
            txn((2025, 1, 2), TransactionKind::Expense, Category::Transport, 3.5),
            txn((2025, 3, 1), TransactionKind::Income, Category::Salary, 100.0),
        ];

        let months = monthly_totals(&records);
        let keys: Vec<&str> = months.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);

        let expected: BTreeSet<String> = records.iter().map(|t| t.year_month()).collect();
        let actual: BTreeSet<String> = months.keys().cloned().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_totals_non_negative_for_non_negative_input() {
        let records = vec![
            txn((2025, 1, 2), TransactionKind::Expense, Category::Transport, 3.5),
            txn((2025, 2, 2), TransactionKind::Income, Category::Investments, 80.0),
        ];

        for totals in monthly_totals(&records).values() {
            assert!(totals.income >= 0.0);
            assert!(totals.expense >= 0.0);
            assert_eq!(totals.balance, totals.income - totals.expense);
        }
    }

    #[test]
    fn test_format_terminal() {
        let records = vec![
            txn((2025, 6, 1), TransactionKind::Income, Category::Salary, 3000.0),
            txn((2025, 5, 5), TransactionKind::Expense, Category::Groceries, 200.0),
        ];
        let output = MonthlyReport::generate(&records).format_terminal();

        let may = output.find("2025-05").unwrap();
        let june = output.find("2025-06").unwrap();
        assert!(may < june);
        assert!(output.contains("$3,000.00"));
        assert!(output.contains("-$200.00"));
    }
}
