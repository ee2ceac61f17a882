//! Core data models for the ledger
//!
//! Money amounts, expense categories and the structured form of an entry.

pub mod category;
pub mod entry;
pub mod money;

pub use category::Category;
pub use entry::{EntryKind, LedgerEntry, Posting, Timestamp, DATETIME_FORMAT, DATE_FORMAT};
pub use money::{AmountOverflow, Money, MoneyParseError};
