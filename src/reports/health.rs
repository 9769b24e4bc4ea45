//! Monthly spending health
//!
//! Each month is labelled from its expense ratio (expenses as a percentage
//! of income):
//!
//! | ratio            | status       |
//! |------------------|--------------|
//! | `<= 50`          | Good         |
//! | `> 50`, `<= 70`  | Caution      |
//! | `> 70`           | Overspending |
//!
//! A month with no income has a ratio of 0 and is therefore `Good`, even if
//! it has expenses.

use std::collections::BTreeMap;
use std::fmt;

use crate::display::report::separator;
use crate::models::{format_number, Transaction};

use super::monthly::{monthly_totals, MonthlyTotals};

/// Highest ratio still considered good
pub const GOOD_RATIO_LIMIT: f64 = 50.0;

/// Highest ratio still considered a caution rather than overspending
pub const CAUTION_RATIO_LIMIT: f64 = 70.0;

/// Spending health label for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthStatus {
    Good,
    Caution,
    Overspending,
}

impl HealthStatus {
    /// Classify an expense ratio. Band limits belong to the lower band.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= GOOD_RATIO_LIMIT {
            Self::Good
        } else if ratio <= CAUTION_RATIO_LIMIT {
            Self::Caution
        } else {
            Self::Overspending
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Caution => "Caution",
            Self::Overspending => "Overspending",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers in table rows apply
        f.pad(self.label())
    }
}

/// Expenses as a percentage of income; 0 when income is not positive
pub fn expense_ratio(income: f64, expense: f64) -> f64 {
    if income > 0.0 {
        expense / income * 100.0
    } else {
        0.0
    }
}

/// Label every month by its expense ratio
pub fn evaluate_monthly_health(
    monthly: &BTreeMap<String, MonthlyTotals>,
) -> BTreeMap<String, HealthStatus> {
    monthly
        .iter()
        .map(|(month, totals)| {
            let ratio = expense_ratio(totals.income, totals.expense);
            (month.clone(), HealthStatus::from_ratio(ratio))
        })
        .collect()
}

/// One row of the health report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyHealth {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub ratio: f64,
    pub status: HealthStatus,
}

/// Monthly financial health report
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub rows: Vec<MonthlyHealth>,
}

impl HealthReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let monthly = monthly_totals(transactions);
        let statuses = evaluate_monthly_health(&monthly);

        let rows = monthly
            .into_iter()
            .zip(statuses.into_values())
            .map(|((month, totals), status)| MonthlyHealth {
                month,
                income: totals.income,
                expense: totals.expense,
                ratio: expense_ratio(totals.income, totals.expense),
                status,
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Monthly financial health:\n\n");
        output.push_str(&format!(
            "{:<10}{:>15}{:>15}{:>15}{:>15}\n",
            "Month", "Income ($)", "Expense ($)", "Exp/Inc (%)", "Status"
        ));
        output.push_str(&separator(70));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10}{:>15}{:>15}{:>15.1}{:>15}\n",
                row.month,
                format_number(row.income),
                format_number(row.expense),
                row.ratio,
                row.status
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionKind};
    use chrono::NaiveDate;

    fn months(entries: &[(&str, f64, f64)]) -> BTreeMap<String, MonthlyTotals> {
        entries
            .iter()
            .map(|(month, income, expense)| {
                (month.to_string(), MonthlyTotals::new(*income, *expense))
            })
            .collect()
    }

    #[test]
    fn test_ratio_bands() {
        assert_eq!(HealthStatus::from_ratio(0.0), HealthStatus::Good);
        assert_eq!(HealthStatus::from_ratio(50.0), HealthStatus::Good);
        assert_eq!(HealthStatus::from_ratio(50.01), HealthStatus::Caution);
        assert_eq!(HealthStatus::from_ratio(70.0), HealthStatus::Caution);
        assert_eq!(HealthStatus::from_ratio(70.01), HealthStatus::Overspending);
        assert_eq!(HealthStatus::from_ratio(250.0), HealthStatus::Overspending);
    }

    #[test]
    fn test_boundaries_through_totals() {
        let statuses = evaluate_monthly_health(&months(&[
            ("2025-01", 1000.0, 500.0),
            ("2025-02", 1000.0, 700.0),
            ("2025-03", 1000.0, 701.0),
        ]));

        assert_eq!(statuses["2025-01"], HealthStatus::Good);
        assert_eq!(statuses["2025-02"], HealthStatus::Caution);
        assert_eq!(statuses["2025-03"], HealthStatus::Overspending);
    }

    #[test]
    fn test_june_scenario() {
        let ratio = expense_ratio(3000.0, 1400.0);
        assert!((ratio - 46.666).abs() < 0.01);

        let statuses = evaluate_monthly_health(&months(&[("2025-06", 3000.0, 1400.0)]));
        assert_eq!(statuses["2025-06"], HealthStatus::Good);
    }

    #[test]
    fn test_no_income_counts_as_good() {
        assert_eq!(expense_ratio(0.0, 100.0), 0.0);

        let statuses = evaluate_monthly_health(&months(&[("2025-07", 0.0, 100.0)]));
        assert_eq!(statuses["2025-07"], HealthStatus::Good);
    }

    #[test]
    fn test_same_input_same_status() {
        let input = months(&[("2025-04", 2000.0, 1300.0), ("2025-05", 10.0, 9.0)]);
        assert_eq!(evaluate_monthly_health(&input), evaluate_monthly_health(&input));
    }

    #[test]
    fn test_empty_input() {
        assert!(evaluate_monthly_health(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_report_generation() {
        let records = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                TransactionKind::Income,
                Category::Salary,
                1000.0,
                "",
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                TransactionKind::Expense,
                Category::Shopping,
                650.0,
                "",
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
                TransactionKind::Expense,
                Category::Shopping,
                90.0,
                "",
            ),
        ];

        let report = HealthReport::generate(&records);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].month, "2025-06");
        assert!((report.rows[0].ratio - 65.0).abs() < 1e-9);
        assert_eq!(report.rows[0].status, HealthStatus::Caution);
        assert_eq!(report.rows[1].status, HealthStatus::Good);

        let output = report.format_terminal();
        assert!(output.contains("65.0"));
        assert!(output.contains("Caution"));
        assert!(output.contains("1,000.00"));
    }
}
