//! Ledger service
//!
//! Business logic for recording and removing expenses and income. Everything
//! downstream of the store (summaries, totals, the time series) works from the
//! canonical strings the store hands out. Lines that no longer decode are
//! kept out of the numbers and handed back alongside them.

use chrono::{Local, Timelike};

use crate::codec::{decode_as, decode_batch, decode_posting, encode, DecodeFailure};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, EntryKind, LedgerEntry, Money, Posting, Timestamp};
use crate::reports::{cumulative_series, sum_by_category, SeriesPoint, SpendingReport};
use crate::storage::{Storage, StoredEntry};

/// A computed value plus the stored lines it had to skip
#[derive(Debug, Clone, PartialEq)]
pub struct Reported<T> {
    pub value: T,
    pub skipped: Vec<DecodeFailure>,
}

/// Service for expense and income management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense; the date defaults to now
    pub fn add_expense(
        &self,
        name: &str,
        category: Category,
        amount: Money,
        date: Option<Timestamp>,
    ) -> LedgerResult<StoredEntry> {
        self.add(EntryKind::Expense, name, Some(category), amount, date)
    }

    /// Record income; the date defaults to now
    pub fn add_income(
        &self,
        description: &str,
        amount: Money,
        date: Option<Timestamp>,
    ) -> LedgerResult<StoredEntry> {
        self.add(EntryKind::Income, description, None, amount, date)
    }

    pub fn remove_expense(&self, id: u64) -> LedgerResult<StoredEntry> {
        self.remove(EntryKind::Expense, id)
    }

    pub fn remove_income(&self, id: u64) -> LedgerResult<StoredEntry> {
        self.remove(EntryKind::Income, id)
    }

    /// All expenses as canonical strings, in id order
    pub fn encoded_expenses(&self) -> LedgerResult<Vec<String>> {
        self.storage.expenses.encoded()
    }

    /// All income as canonical strings, in id order
    pub fn encoded_income(&self) -> LedgerResult<Vec<String>> {
        self.storage.income.encoded()
    }

    /// Category totals of every stored expense
    pub fn summarise_expenses(&self) -> LedgerResult<Reported<SpendingReport>> {
        let batch = decode_batch(self.encoded_expenses()?, EntryKind::Expense);
        Ok(Reported {
            value: sum_by_category(&batch.entries)?,
            skipped: batch.failures,
        })
    }

    /// Sum of every stored income amount
    pub fn total_income(&self) -> LedgerResult<Reported<Money>> {
        let (income, skipped) = postings(&self.encoded_income()?, EntryKind::Income);
        let total = Money::try_sum(income.iter().map(|posting| posting.amount))?;
        Ok(Reported {
            value: total,
            skipped,
        })
    }

    /// Cumulative income vs expenses, one point per day
    pub fn cashflow_series(&self) -> LedgerResult<Reported<Vec<SeriesPoint>>> {
        let (expenses, mut skipped) = postings(&self.encoded_expenses()?, EntryKind::Expense);
        let (income, skipped_income) = postings(&self.encoded_income()?, EntryKind::Income);
        skipped.extend(skipped_income);

        Ok(Reported {
            value: cumulative_series(expenses, income)?,
            skipped,
        })
    }

    fn add(
        &self,
        kind: EntryKind,
        label: &str,
        category: Option<Category>,
        amount: Money,
        date: Option<Timestamp>,
    ) -> LedgerResult<StoredEntry> {
        let label = label.trim();
        if label.is_empty() {
            return Err(LedgerError::Validation(format!(
                "{} needs a {}",
                kind,
                label_name(kind)
            )));
        }
        if amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Amount cannot be negative: {}",
                amount
            )));
        }

        let candidate = LedgerEntry {
            id: 1,
            label: label.to_string(),
            category,
            amount,
            timestamp: date.unwrap_or_else(now),
        };
        check_round_trip(kind, &candidate)?;

        let repo = self.storage.repository(kind);
        let entry = repo.insert(
            candidate.label,
            candidate.category,
            candidate.amount,
            candidate.timestamp,
        )?;
        repo.save()?;

        self.storage.log_create(kind, &entry)?;

        Ok(entry)
    }

    fn remove(&self, kind: EntryKind, id: u64) -> LedgerResult<StoredEntry> {
        let repo = self.storage.repository(kind);
        let entry = repo.remove(id)?;
        repo.save()?;

        self.storage.log_delete(kind, &entry)?;

        Ok(entry)
    }
}

fn label_name(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Expense => "name",
        EntryKind::Income => "description",
    }
}

/// Reject labels that would not survive the canonical string, such as an
/// expense name with parentheses or any label containing " on ["
fn check_round_trip(kind: EntryKind, entry: &LedgerEntry) -> LedgerResult<()> {
    match decode_as(&encode(entry), kind) {
        Ok(decoded) if decoded.label == entry.label && decoded.category == entry.category => Ok(()),
        _ => Err(LedgerError::Validation(format!(
            "{} {} '{}' cannot be stored as written",
            kind,
            label_name(kind),
            entry.label
        ))),
    }
}

/// Current local time, truncated to whole seconds
fn now() -> Timestamp {
    let now = Local::now().naive_local();
    Timestamp::DateTime(now.with_nanosecond(0).unwrap_or(now))
}

/// Amounts and dates of stored lines, plus the lines that failed
fn postings(lines: &[String], kind: EntryKind) -> (Vec<Posting>, Vec<DecodeFailure>) {
    let mut decoded = Vec::with_capacity(lines.len());
    let mut failures = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        match decode_posting(line) {
            Ok(posting) => decoded.push(posting),
            Err(error) => failures.push(DecodeFailure {
                kind,
                line: index + 1,
                text: line.clone(),
                error,
            }),
        }
    }
    (decoded, failures)
}
