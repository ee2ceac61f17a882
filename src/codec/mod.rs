//! Canonical string codec for ledger entries
//!
//! Every entry leaves the store as one human-readable line:
//!
//! ```text
//! {id}: {label}[ ({category})] - £{amount:,.2f} on [{YYYY-MM-DD[ HH:MM:SS]}]
//! ```
//!
//! This module is the only place that grammar is written down. Display,
//! export and charting all go through [`decode`] / [`encode`] rather than
//! splitting strings themselves.
//!
//! # Example
//!
//! ```
//! use ledger_cli::codec::{decode, encode};
//!
//! let entry = decode("  3: Lunch (Food) -  £12.5 on [2023-10-01 12:00:00] ").unwrap();
//! assert_eq!(encode(&entry), "3: Lunch (Food) - £12.50 on [2023-10-01 12:00:00]");
//! ```

mod currency;
mod decode;
mod encode;

pub use currency::format_currency;
pub use decode::{decode, decode_as, decode_batch, decode_posting, DecodeFailure, DecodedBatch};
pub use encode::encode;

use thiserror::Error;

/// Why a canonical string could not be decoded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// No `" on ["` marker in the string
    #[error("missing date marker \" on [\"")]
    MissingDateMarker,

    /// Date marker present but no closing `]`
    #[error("date is not terminated by ']'")]
    UnterminatedDate,

    /// Date segment matches neither `YYYY-MM-DD HH:MM:SS` nor `YYYY-MM-DD`
    #[error("date is not a valid YYYY-MM-DD[ HH:MM:SS] value")]
    BadDate,

    /// Something other than whitespace follows the closing `]`
    #[error("unexpected text after the closing ']'")]
    TrailingText,

    /// Neither `" - £"` nor `" - "` precedes the date marker
    #[error("missing amount separator \" - \"")]
    MissingAmount,

    /// Amount segment is not a decimal number
    #[error("amount is not a valid number")]
    BadAmount,

    /// No `:` separating the identifier from the label
    #[error("missing ':' after the entry id")]
    MissingId,

    /// Identifier is not a positive integer
    #[error("entry id is not a positive integer")]
    BadId,

    /// Nothing between the identifier and the amount
    #[error("entry label is empty")]
    EmptyLabel,

    /// An expense was expected but no `(category)` could be found
    #[error("expense has no (category)")]
    MissingCategory,
}
