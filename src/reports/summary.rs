//! Overall income, expense and balance

use crate::models::{format_amount, Transaction, TransactionKind};

/// Totals across the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryTotals {
    pub total_income: f64,
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub balance: f64,
}

/// Sum income and expenses over all transactions
pub fn summary_totals(transactions: &[Transaction]) -> SummaryTotals {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), txn| match txn.kind {
                TransactionKind::Income => (income + txn.amount, expense),
                TransactionKind::Expense => (income, expense + txn.amount),
            });

    SummaryTotals {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

impl SummaryTotals {
    /// Format the totals for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("Summary:\n");
        output.push_str(&format!(
            "- Total income:    {}\n",
            format_amount(self.total_income)
        ));
        output.push_str(&format!(
            "- Total expenses:  {}\n",
            format_amount(self.total_expense)
        ));
        output.push_str(&format!(
            "- Current balance: {}\n",
            format_amount(self.balance)
        ));
        output
    }
}
