//! Ledger entry model
//!
//! The structured view of one expense or income record. Entries only exist
//! in this form transiently: the store hands them out as canonical strings
//! and consumers decode them for the duration of a single operation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Full datetime layout used in canonical strings
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only layout used in canonical strings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The two kinds of ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Expense,
    Income,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Expense => write!(f, "Expense"),
            EntryKind::Income => write!(f, "Income"),
        }
    }
}

/// When an entry happened: a date, optionally with time-of-day
///
/// Remembers which form it was given in so a date-only entry is rendered
/// back as date-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timestamp {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Timestamp {
    /// Parse `YYYY-MM-DD HH:MM:SS`, falling back to `YYYY-MM-DD`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
            .map(Timestamp::DateTime)
            .or_else(|_| NaiveDate::parse_from_str(s, DATE_FORMAT).map(Timestamp::Date))
            .ok()
    }

    /// Calendar date component
    pub fn date(&self) -> NaiveDate {
        match self {
            Timestamp::Date(date) => *date,
            Timestamp::DateTime(datetime) => datetime.date(),
        }
    }

    /// Full datetime; date-only timestamps fall at midnight
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Timestamp::Date(date) => date.and_time(NaiveTime::MIN),
            Timestamp::DateTime(datetime) => *datetime,
        }
    }

    /// Whether a time-of-day was given
    pub fn has_time(&self) -> bool {
        matches!(self, Timestamp::DateTime(_))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Timestamp::DateTime(datetime) => write!(f, "{}", datetime.format(DATETIME_FORMAT)),
        }
    }
}

impl TryFrom<String> for Timestamp {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Timestamp::parse(&value).ok_or_else(|| format!("invalid timestamp: {}", value))
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_string()
    }
}

/// The two fields every consumer of a canonical string can rely on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub timestamp: Timestamp,
    pub amount: Money,
}

/// Decoded expense or income entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub id: u64,
    pub label: String,
    /// Present for expenses only
    pub category: Option<Category>,
    pub amount: Money,
    pub timestamp: Timestamp,
}

impl LedgerEntry {
    /// Build an expense entry
    pub fn expense(
        id: u64,
        label: impl Into<String>,
        category: Category,
        amount: Money,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            category: Some(category),
            amount,
            timestamp,
        }
    }

    /// Build an income entry
    pub fn income(id: u64, label: impl Into<String>, amount: Money, timestamp: Timestamp) -> Self {
        Self {
            id,
            label: label.into(),
            category: None,
            amount,
            timestamp,
        }
    }

    /// Date and amount view used by the aggregator
    pub fn posting(&self) -> Posting {
        Posting {
            timestamp: self.timestamp,
            amount: self.amount,
        }
    }
}
