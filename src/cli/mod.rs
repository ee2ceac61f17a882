//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod chart;
pub mod expense;
pub mod export;
pub mod income;

pub use chart::handle_chart_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};

use std::str::FromStr;

use crate::codec::DecodeFailure;
use crate::models::{Category, Money, Timestamp};

/// Parse an amount argument such as "12.50", "£1,200" or "3"
pub fn parse_amount(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Parse a date argument: `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`
pub fn parse_date(s: &str) -> Result<Timestamp, String> {
    Timestamp::parse(s)
        .ok_or_else(|| format!("'{}' is not a date (use YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)", s))
}

/// Parse a category argument: a name or its number in the list
pub fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str(s)
}

/// Tell the user which stored lines were left out, on stderr
pub fn report_skipped(skipped: &[DecodeFailure]) {
    for failure in skipped {
        eprintln!(
            "Skipped {} line {} ({}): {}",
            failure.kind.to_string().to_lowercase(),
            failure.line,
            failure.error,
            failure.text
        );
    }
}
