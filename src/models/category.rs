//! Transaction categories
//!
//! Categories form two closed vocabularies, one per transaction kind.
//! `Others` appears in both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionKind;

/// A transaction category
///
/// Ordering follows declaration order, which is also the order categories
/// are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Groceries,
    #[serde(rename = "dine out")]
    DineOut,
    Transport,
    Housing,
    Shopping,
    Salary,
    Investments,
    Bonuses,
    Others,
}

/// Categories available for expenses, in menu order
pub const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Groceries,
    Category::DineOut,
    Category::Transport,
    Category::Housing,
    Category::Shopping,
    Category::Others,
];

/// Categories available for income, in menu order
pub const INCOME_CATEGORIES: &[Category] = &[
    Category::Salary,
    Category::Investments,
    Category::Bonuses,
    Category::Others,
];

impl Category {
    /// Every category, in declaration order
    pub fn all() -> &'static [Self] {
        &[
            Self::Groceries,
            Self::DineOut,
            Self::Transport,
            Self::Housing,
            Self::Shopping,
            Self::Salary,
            Self::Investments,
            Self::Bonuses,
            Self::Others,
        ]
    }

    /// The name used in the data file and on screen
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::DineOut => "dine out",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Shopping => "shopping",
            Self::Salary => "salary",
            Self::Investments => "investments",
            Self::Bonuses => "bonuses",
            Self::Others => "others",
        }
    }

    /// Check whether this category is part of the vocabulary for `kind`
    pub fn belongs_to(&self, kind: TransactionKind) -> bool {
        kind.categories().contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

impl From<CategoryParseError> for crate::error::BudgetError {
    fn from(err: CategoryParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
