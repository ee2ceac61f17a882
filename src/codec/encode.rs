//! Canonical encoding of ledger entries

use crate::models::LedgerEntry;

use super::currency::format_currency;

/// Render an entry in canonical form
///
/// Expenses: `"{id}: {label} ({category}) - {amount} on [{timestamp}]"`.
/// Income:   `"{id}: {label} - {amount} on [{timestamp}]"`.
pub fn encode(entry: &LedgerEntry) -> String {
    match &entry.category {
        Some(category) => format!(
            "{}: {} ({}) - {} on [{}]",
            entry.id,
            entry.label,
            category,
            format_currency(entry.amount),
            entry.timestamp
        ),
        None => format!(
            "{}: {} - {} on [{}]",
            entry.id,
            entry.label,
            format_currency(entry.amount),
            entry.timestamp
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Timestamp};

    #[test]
    fn test_encode_expense() {
        let entry = LedgerEntry::expense(
            3,
            "Lunch",
            Category::Food,
            Money::from_pence(1250),
            Timestamp::parse("2023-10-01 12:00:00").unwrap(),
        );
        assert_eq!(
            encode(&entry),
            "3: Lunch (Food) - £12.50 on [2023-10-01 12:00:00]"
        );
    }

    #[test]
    fn test_encode_income_date_only() {
        let entry = LedgerEntry::income(
            7,
            "Salary",
            Money::from_pence(250_000),
            Timestamp::parse("2023-10-31").unwrap(),
        );
        assert_eq!(encode(&entry), "7: Salary - £2,500.00 on [2023-10-31]");
    }
}
