//! CSV export of stored entries
//!
//! Each stored string is decoded and flattened into a fixed column order.
//! Lines that fail to decode are skipped and reported back to the caller.

use std::io::Write;

use crate::codec::{decode_as, DecodeFailure, ParseError};
use crate::error::LedgerResult;
use crate::models::EntryKind;

/// Column headers for the expenses file
pub const EXPENSE_HEADERS: [&str; 5] = ["ID", "Name", "Category", "Amount (£)", "Date"];

/// Column headers for the income file
pub const INCOME_HEADERS: [&str; 4] = ["ID", "Description", "Amount (£)", "Date"];

/// Headers matching the columns produced by [`to_fields`] for a kind
pub fn headers(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Expense => &EXPENSE_HEADERS,
        EntryKind::Income => &INCOME_HEADERS,
    }
}

/// Flatten one stored string into export columns
///
/// Expense: `id, label, category, amount, date`.
/// Income: `id, label, amount, date`.
/// Amounts are plain two-decimal numbers; dates keep their stored form.
pub fn to_fields(text: &str, kind: EntryKind) -> Result<Vec<String>, ParseError> {
    let entry = decode_as(text, kind)?;

    let mut fields = Vec::with_capacity(5);
    fields.push(entry.id.to_string());
    fields.push(entry.label);
    if let Some(category) = entry.category {
        fields.push(category.to_string());
    }
    fields.push(entry.amount.to_plain_string());
    fields.push(entry.timestamp.to_string());

    Ok(fields)
}

/// Outcome of writing one CSV file
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Rows written, excluding the header
    pub written: usize,
    /// Lines that could not be decoded
    pub skipped: Vec<DecodeFailure>,
}

/// Write stored strings of one kind as CSV, header first
pub fn write_entries_csv<W, S>(writer: W, lines: &[S], kind: EntryKind) -> LedgerResult<ExportSummary>
where
    W: Write,
    S: AsRef<str>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(headers(kind))?;

    let mut summary = ExportSummary::default();
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        match to_fields(line, kind) {
            Ok(fields) => {
                csv_writer.write_record(&fields)?;
                summary.written += 1;
            }
            Err(error) => summary.skipped.push(DecodeFailure {
                kind,
                line: index + 1,
                text: line.to_string(),
                error,
            }),
        }
    }

    csv_writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_fields() {
        let fields = to_fields(
            "3: Lunch (Food) - £1,012.50 on [2023-10-01 12:00:00]",
            EntryKind::Expense,
        )
        .unwrap();
        assert_eq!(
            fields,
            vec!["3", "Lunch", "Food", "1012.50", "2023-10-01 12:00:00"]
        );
    }

    #[test]
    fn test_income_fields() {
        let fields = to_fields(" 7: Salary (June) - 2500 on [2023-06-30] ", EntryKind::Income)
            .unwrap();
        assert_eq!(fields, vec!["7", "Salary (June)", "2500.00", "2023-06-30"]);
    }

    #[test]
    fn test_fields_surface_parse_errors() {
        assert_eq!(
            to_fields("not an entry", EntryKind::Income),
            Err(ParseError::MissingDateMarker)
        );
        assert_eq!(
            to_fields("1: Bus - £2.00 on [2023-10-01]", EntryKind::Expense),
            Err(ParseError::MissingCategory)
        );
    }

    #[test]
    fn test_write_entries_csv() {
        let lines = vec![
            "1: Lunch, with Sam (Food) - £12.50 on [2023-10-01]".to_string(),
            "broken line".to_string(),
            "2: Cinema (Fun) - £9.00 on [2023-10-02 19:30:00]".to_string(),
        ];

        let mut output = Vec::new();
        let summary = write_entries_csv(&mut output, &lines, EntryKind::Expense).unwrap();
        assert_eq!(summary.written, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].line, 2);
        assert_eq!(summary.skipped[0].error, ParseError::MissingDateMarker);

        let csv_string = String::from_utf8(output).unwrap();
        let mut rows = csv_string.lines();
        assert_eq!(rows.next(), Some("ID,Name,Category,Amount (£),Date"));
        assert_eq!(
            rows.next(),
            Some("1,\"Lunch, with Sam\",Food,12.50,2023-10-01")
        );
        assert_eq!(rows.next(), Some("2,Cinema,Fun,9.00,2023-10-02 19:30:00"));
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn test_empty_income_file_has_header_only() {
        let lines: Vec<String> = Vec::new();
        let mut output = Vec::new();
        let summary = write_entries_csv(&mut output, &lines, EntryKind::Income).unwrap();
        assert_eq!(summary.written, 0);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ID,Description,Amount (£),Date\n"
        );
    }
}
