//! Amount parsing and formatting
//!
//! Amounts are plain `f64` values. On screen they always show two decimals
//! with thousands separators, e.g. `$1,234.50` or `-$12.00`.

use std::fmt;

/// Format an amount as dollars with two decimals and thousands separators
pub fn format_amount(amount: f64) -> String {
    format_amount_with_symbol(amount, "$")
}

/// Format an amount with an arbitrary currency symbol
pub fn format_amount_with_symbol(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        symbol,
        group_thousands(whole),
        fraction
    )
}

/// Format a plain number with two decimals and thousands separators
pub fn format_number(value: f64) -> String {
    format_amount_with_symbol(value, "")
}

/// Insert a comma between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an amount typed by the user
///
/// Accepts formats: "25.50", "-10", "$1,200.00", "1e3"
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() || cleaned.starts_with('-') {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::NotFinite(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            Self::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

impl From<AmountParseError> for crate::error::BudgetError {
    fn from(err: AmountParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
