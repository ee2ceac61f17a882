//! Currency formatting
//!
//! Renders amounts as `£` + thousands-grouped pounds + two pence digits.

use crate::models::Money;

/// Format an amount as a pound sterling string, e.g. `£1,234.50`
///
/// Negative amounts put the sign before the symbol: `-£5.00`.
pub fn format_currency(amount: Money) -> String {
    let magnitude = amount.pence().unsigned_abs();
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}£{}.{:02}",
        sign,
        group_thousands(magnitude / 100),
        magnitude % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(s: &str) -> String {
        format_currency(Money::parse(s).unwrap())
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(fmt("1234.5"), "£1,234.50");
        assert_eq!(fmt("0"), "£0.00");
        assert_eq!(fmt("1000000"), "£1,000,000.00");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(fmt("999.99"), "£999.99");
        assert_eq!(fmt("1000"), "£1,000.00");
        assert_eq!(fmt("12345.678"), "£12,345.68");
        assert_eq!(fmt("0.005"), "£0.01");
    }

    #[test]
    fn test_negative_sign_before_symbol() {
        assert_eq!(format_currency(Money::from_pence(-123_456)), "-£1,234.56");
        assert_eq!(format_currency(Money::from_pence(i64::MIN)), "-£92,233,720,368,547,758.08");
    }
}
