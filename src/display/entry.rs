//! Entry display formatting
//!
//! Stored strings are re-rendered through the codec before printing so that
//! spacing and currency format are consistent. Lines that cannot be decoded
//! are shown exactly as stored.

use crate::codec::{decode, encode};

/// Canonical form of an entry string, or the input unchanged if it does not decode
pub fn normalize(text: &str) -> String {
    match decode(text) {
        Ok(entry) => encode(&entry),
        Err(_) => text.to_string(),
    }
}

/// Format a list of stored strings for terminal output
pub fn format_entry_list<S: AsRef<str>>(title: &str, lines: &[S]) -> String {
    if lines.is_empty() {
        return format!("No {} recorded yet.", title.to_lowercase());
    }

    let mut output = format!("All {}:\n", title);
    for line in lines {
        output.push_str("  ");
        output.push_str(&normalize(line.as_ref()));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pads_amount() {
        assert_eq!(
            normalize("1: Lunch (Food) - £12.5 on [2023-10-01]"),
            "1: Lunch (Food) - £12.50 on [2023-10-01]"
        );
    }

    #[test]
    fn test_normalize_cleans_whitespace() {
        assert_eq!(
            normalize("  2: Coffee (Drink) -  £3.2 on [2023-10-02 ]  "),
            "2: Coffee (Drink) - £3.20 on [2023-10-02]"
        );
    }

    #[test]
    fn test_normalize_invalid_is_verbatim() {
        assert_eq!(normalize("This line is invalid"), "This line is invalid");
        assert_eq!(normalize("  padded junk  "), "  padded junk  ");
    }

    #[test]
    fn test_normalize_keeps_trailing_text() {
        let text = "1: a - £1 on [2023-01-01] trailing";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "1: Lunch (Food) - £12.5 on [2023-10-01]",
            "  2: Coffee (Drink) -  £3.2 on [2023-10-02 ]  ",
            "3: Snack - 4 on [2023-10-03 09:15:00]",
            "4: Fish - chips (food) - £1234.567 on [2023-10-04]",
            "5: Tea (green) leaves - £2 on [2023-10-05]",
            "6: Refund - -£5 on [2023-10-06]",
            "007: Rent (Home) - £1,000 on [2023-10-07]",
            "8: Go on [holiday] - £3.00 on [2023-10-08]",
            "Not a valid entry",
            "",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_format_entry_list() {
        let lines = vec!["1: Salary - 2000 on [2023-10-01]".to_string()];
        let output = format_entry_list("Income", &lines);
        assert!(output.starts_with("All Income:"));
        assert!(output.contains("1: Salary - £2,000.00 on [2023-10-01]"));

        let empty: Vec<String> = Vec::new();
        assert_eq!(format_entry_list("Expenses", &empty), "No expenses recorded yet.");
    }
}
