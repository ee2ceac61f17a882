//! Tolerant decoding of canonical entry strings
//!
//! The amount and date are located first; they are all the aggregator needs.
//! Identifier, label and category are split out of what remains only for a
//! full-field decode.

use crate::models::{Category, EntryKind, LedgerEntry, Money, Posting, Timestamp};

use super::ParseError;

const DATE_MARKER: &str = " on [";
const DATE_END: char = ']';
const AMOUNT_WITH_SYMBOL: &str = " - £";
const AMOUNT_SEPARATOR: &str = " - ";

/// Decode only the timestamp and amount of an entry string
pub fn decode_posting(text: &str) -> Result<Posting, ParseError> {
    split_posting(text).map(|(_, posting)| posting)
}

/// Decode every field, inferring expense or income from the string's shape
///
/// A string is expense-shaped when the text after the id holds a `(` and
/// the first `)` after it closes the text.
pub fn decode(text: &str) -> Result<LedgerEntry, ParseError> {
    decode_fields(text, None)
}

/// Decode every field for a known record kind
///
/// Income never carries a category; an expense must have one.
pub fn decode_as(text: &str, kind: EntryKind) -> Result<LedgerEntry, ParseError> {
    decode_fields(text, Some(kind))
}

/// A line of a batch that failed to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub kind: EntryKind,
    /// 1-based position in the batch
    pub line: usize,
    pub text: String,
    pub error: ParseError,
}

/// Result of decoding a batch of stored strings one record at a time
#[derive(Debug, Clone, Default)]
pub struct DecodedBatch {
    pub entries: Vec<LedgerEntry>,
    pub failures: Vec<DecodeFailure>,
}

impl DecodedBatch {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decode each line independently; a bad line never stops the rest
pub fn decode_batch<I, S>(lines: I, kind: EntryKind) -> DecodedBatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = DecodedBatch::default();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match decode_as(line, kind) {
            Ok(entry) => batch.entries.push(entry),
            Err(error) => batch.failures.push(DecodeFailure {
                kind,
                line: index + 1,
                text: line.to_string(),
                error,
            }),
        }
    }
    batch
}

/// Returns the text ahead of the amount (`"{id}: {label}..."`) plus the posting
fn split_posting(text: &str) -> Result<(&str, Posting), ParseError> {
    let text = text.trim();

    let (before, after) = text
        .split_once(DATE_MARKER)
        .ok_or(ParseError::MissingDateMarker)?;

    let (date_text, trailing) = after
        .split_once(DATE_END)
        .ok_or(ParseError::UnterminatedDate)?;

    let timestamp = Timestamp::parse(date_text).ok_or(ParseError::BadDate)?;

    if !trailing.trim().is_empty() {
        return Err(ParseError::TrailingText);
    }

    // The amount is the last field before the date, so split at the last
    // separator; labels may contain " - " themselves.
    let (head, amount_text) = before
        .rsplit_once(AMOUNT_WITH_SYMBOL)
        .or_else(|| before.rsplit_once(AMOUNT_SEPARATOR))
        .ok_or(ParseError::MissingAmount)?;

    let amount = Money::parse(amount_text).map_err(|_| ParseError::BadAmount)?;

    Ok((head, Posting { timestamp, amount }))
}

fn decode_fields(text: &str, kind: Option<EntryKind>) -> Result<LedgerEntry, ParseError> {
    let (head, posting) = split_posting(text)?;

    let (id_text, rest) = head.split_once(':').ok_or(ParseError::MissingId)?;
    let id = parse_id(id_text)?;
    let rest = rest.trim();

    let (label, category) = match kind {
        Some(EntryKind::Income) => (rest, None),
        Some(EntryKind::Expense) => {
            let (label, category) =
                split_category(rest, false).ok_or(ParseError::MissingCategory)?;
            (label, Some(category))
        }
        None => match split_category(rest, true) {
            Some((label, category)) => (label, Some(category)),
            None => (rest, None),
        },
    };

    if label.is_empty() {
        return Err(ParseError::EmptyLabel);
    }

    Ok(LedgerEntry {
        id,
        label: label.to_string(),
        category: category.map(Category::from_label),
        amount: posting.amount,
        timestamp: posting.timestamp,
    })
}

fn parse_id(text: &str) -> Result<u64, ParseError> {
    match text.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ParseError::BadId),
        Ok(id) => Ok(id),
    }
}

/// `"Lunch (Food)"` -> `("Lunch", "Food")`
///
/// The category sits between the first `(` and the `)` after it. With
/// `closes_text`, that `)` must also be the last character.
fn split_category(rest: &str, closes_text: bool) -> Option<(&str, &str)> {
    let open = rest.find('(')?;
    let close = open + rest[open..].find(')')?;

    if closes_text && !rest[close + 1..].trim().is_empty() {
        return None;
    }

    let category = rest[open + 1..close].trim();
    if category.is_empty() {
        return None;
    }

    Some((rest[..open].trim(), category))
}
