//! Reports module for the budget manager
//!
//! Pure aggregations over a snapshot of the ledger: spending by category,
//! overall totals, monthly statistics and monthly spending health. Nothing
//! here performs I/O or mutates its input.

pub mod category;
pub mod health;
pub mod monthly;
pub mod summary;

pub use category::{category_totals, CategoryReport, CategorySpending};
pub use health::{evaluate_monthly_health, expense_ratio, HealthReport, HealthStatus, MonthlyHealth};
pub use monthly::{monthly_totals, MonthlyReport, MonthlyTotals};
pub use summary::{summary_totals, SummaryTotals};
