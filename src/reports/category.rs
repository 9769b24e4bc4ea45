//! Spending by category
//!
//! Only expenses have a category breakdown; income records are skipped.

use std::collections::BTreeMap;

use crate::display::report::{format_percentage, separator};
use crate::models::{format_amount, Category, Transaction};

/// Sum expense amounts per category
///
/// Keys iterate in vocabulary order. An input without expenses yields an
/// empty map.
pub fn category_totals(transactions: &[Transaction]) -> BTreeMap<Category, f64> {
    transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .fold(BTreeMap::new(), |mut totals, txn| {
            *totals.entry(txn.category).or_insert(0.0) += txn.amount;
            totals
        })
}

/// One row of the category report
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub total: f64,
    /// Number of expense records in this category
    pub transaction_count: usize,
    /// Share of total spending, 0 when there is no spending
    pub percentage: f64,
}

/// Spending broken down by category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub rows: Vec<CategorySpending>,
    pub total_spending: f64,
}

impl CategoryReport {
    /// Build the report from a snapshot of the ledger
    pub fn generate(transactions: &[Transaction]) -> Self {
        let totals = category_totals(transactions);
        let total_spending: f64 = totals.values().sum();

        let rows = totals
            .into_iter()
            .map(|(category, total)| {
                let transaction_count = transactions
                    .iter()
                    .filter(|txn| txn.is_expense() && txn.category == category)
                    .count();
                let percentage = if total_spending == 0.0 {
                    0.0
                } else {
                    total / total_spending * 100.0
                };
                CategorySpending {
                    category,
                    total,
                    transaction_count,
                    percentage,
                }
            })
            .collect();

        Self {
            rows,
            total_spending,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Spending by category:\n\n");
        output.push_str(&format!(
            "{:<20}{:>14}{:>8}{:>8}\n",
            "category", "total spent", "count", "share"
        ));
        output.push_str(&separator(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20}{:>14}{:>8}{:>8}\n",
                row.category.name(),
                format_amount(row.total),
                row.transaction_count,
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20}{:>14}\n",
            "total",
            format_amount(self.total_spending)
        ));

        output
    }
}
