//! Spending by category
//!
//! Groups decoded expense entries by category and sums them exactly in
//! pence. Output keeps categories in the order they were first seen so the
//! result is deterministic for a given input order, while the totals
//! themselves do not depend on order at all. Totals that would overflow are
//! reported as [`AmountOverflow`] instead of being wrapped.

use std::collections::HashMap;

use crate::models::{AmountOverflow, Category, LedgerEntry, Money};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingByCategory {
    pub category: Category,
    pub total: Money,
    /// Number of entries contributing to the total
    pub entry_count: usize,
}

/// Category totals in first-seen order
///
/// Categories with no entries are absent rather than present with zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendingReport {
    rows: Vec<SpendingByCategory>,
    grand_total: Money,
}

impl SpendingReport {
    /// Rows in first-seen category order
    pub fn rows(&self) -> &[SpendingByCategory] {
        &self.rows
    }

    /// Total for one category, if it had any entries
    pub fn total_for(&self, category: &Category) -> Option<Money> {
        self.rows
            .iter()
            .find(|row| &row.category == category)
            .map(|row| row.total)
    }

    /// Sum across every category
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    /// Share of the grand total for a row, as a percentage
    pub fn percentage(&self, row: &SpendingByCategory) -> f64 {
        let total = self.grand_total();
        if total.is_zero() {
            0.0
        } else {
            row.total.pence() as f64 / total.pence() as f64 * 100.0
        }
    }

    /// `(label, total)` pairs for categorical charts
    pub fn pairs(&self) -> Vec<(String, Money)> {
        self.rows
            .iter()
            .map(|row| (row.category.to_string(), row.total))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No expenses to summarize.".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<20} {:>14} {:>7} {:>7}\n",
            "Category", "Total", "Count", "%"
        ));
        output.push_str(&"-".repeat(51));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>14} {:>7} {:>6.1}%\n",
                row.category,
                row.total.to_string(),
                row.entry_count,
                self.percentage(row)
            ));
        }

        output.push_str(&"-".repeat(51));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total",
            self.grand_total().to_string()
        ));

        output
    }
}

/// Sum expense amounts per category
///
/// Entries without a category (income) are ignored.
pub fn sum_by_category<'a, I>(entries: I) -> Result<SpendingReport, AmountOverflow>
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut rows: Vec<SpendingByCategory> = Vec::new();
    let mut index: HashMap<Category, usize> = HashMap::new();
    let mut grand_total = Money::zero();

    for entry in entries {
        let Some(category) = &entry.category else {
            continue;
        };

        grand_total = grand_total
            .checked_add(entry.amount)
            .ok_or(AmountOverflow)?;

        match index.get(category) {
            Some(&i) => {
                rows[i].total = rows[i]
                    .total
                    .checked_add(entry.amount)
                    .ok_or(AmountOverflow)?;
                rows[i].entry_count += 1;
            }
            None => {
                index.insert(category.clone(), rows.len());
                rows.push(SpendingByCategory {
                    category: category.clone(),
                    total: entry.amount,
                    entry_count: 1,
                });
            }
        }
    }

    Ok(SpendingReport { rows, grand_total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timestamp;

    fn expense(id: u64, category: Category, pence: i64) -> LedgerEntry {
        LedgerEntry::expense(
            id,
            format!("Item {}", id),
            category,
            Money::from_pence(pence),
            Timestamp::parse("2023-10-01").unwrap(),
        )
    }

    #[test]
    fn test_sum_by_category() {
        let entries = vec![
            expense(1, Category::Food, 1000),
            expense(2, Category::Food, 550),
            expense(3, Category::Fun, 2000),
        ];

        let report = sum_by_category(&entries).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.total_for(&Category::Food), Some(Money::from_pence(1550)));
        assert_eq!(report.total_for(&Category::Fun), Some(Money::from_pence(2000)));
        assert_eq!(report.total_for(&Category::Home), None);
        assert_eq!(report.grand_total().pence(), 3550);
        assert_eq!(report.rows()[0].entry_count, 2);
    }

    #[test]
    fn test_totals_independent_of_order() {
        let entries = vec![
            expense(1, Category::Food, 1000),
            expense(2, Category::Food, 550),
            expense(3, Category::Fun, 2000),
        ];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for order in orders {
            let permuted: Vec<&LedgerEntry> = order.iter().map(|&i| &entries[i]).collect();
            let report = sum_by_category(permuted).unwrap();
            assert_eq!(report.total_for(&Category::Food), Some(Money::from_pence(1550)));
            assert_eq!(report.total_for(&Category::Fun), Some(Money::from_pence(2000)));
        }
    }

    #[test]
    fn test_first_seen_order() {
        let entries = vec![
            expense(1, Category::Work, 100),
            expense(2, Category::Food, 100),
            expense(3, Category::Work, 100),
            expense(4, Category::Other("Drink".into()), 100),
        ];
        let report = sum_by_category(&entries).unwrap();
        let order: Vec<String> = report.pairs().into_iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["Work", "Food", "Drink"]);
    }

    #[test]
    fn test_exact_over_many_entries() {
        // 0.10 added ten thousand times drifts in floating point
        let entries: Vec<LedgerEntry> = (1..=10_000).map(|i| expense(i, Category::Misc, 10)).collect();
        let report = sum_by_category(&entries).unwrap();
        assert_eq!(report.total_for(&Category::Misc), Some(Money::from_pence(100_000)));
    }

    #[test]
    fn test_income_entries_ignored() {
        let income = LedgerEntry::income(
            1,
            "Salary",
            Money::from_pence(100_000),
            Timestamp::parse("2023-10-01").unwrap(),
        );
        let report = sum_by_category([&income]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.format_terminal(), "No expenses to summarize.");
    }

    #[test]
    fn test_percentage_and_format() {
        let entries = vec![
            expense(1, Category::Food, 2500),
            expense(2, Category::Home, 7500),
        ];
        let report = sum_by_category(&entries).unwrap();
        assert!((report.percentage(&report.rows()[0]) - 25.0).abs() < f64::EPSILON);

        let output = report.format_terminal();
        assert!(output.contains("Food"));
        assert!(output.contains("£75.00"));
        assert!(output.contains("£100.00"));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let huge = Money::parse("£90,000,000,000,000,000.00").unwrap().pence();

        let entries = vec![expense(1, Category::Fun, huge), expense(2, Category::Fun, huge)];
        assert_eq!(sum_by_category(&entries), Err(AmountOverflow));

        // Each category fits on its own but the grand total does not
        let entries = vec![expense(1, Category::Fun, huge), expense(2, Category::Home, huge)];
        assert_eq!(sum_by_category(&entries), Err(AmountOverflow));
    }
}
