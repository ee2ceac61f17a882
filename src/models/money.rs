//! Money type for representing currency amounts
//!
//! Internally stores amounts in pence (i64) so that sums over many entries
//! never drift the way floating-point totals do. Addition is checked only:
//! a total that leaves the `i64` range is an [`AmountOverflow`], never a
//! wrapped figure.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::codec::format_currency;

/// Represents a monetary amount stored as pence (hundredths of a pound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from pence
    ///
    /// # Examples
    /// ```
    /// use ledger_cli::models::Money;
    /// let amount = Money::from_pence(1050); // £10.50
    /// assert_eq!(amount.to_string(), "£10.50");
    /// ```
    pub const fn from_pence(pence: i64) -> Self {
        Self(pence)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in pence
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Get the whole pounds portion (truncated toward zero)
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Get the pence portion (0-99)
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum of two amounts, or `None` when it does not fit
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(pence) => Some(Self(pence)),
            None => None,
        }
    }

    /// Sum every amount, failing on the first addition that overflows
    pub fn try_sum<I>(amounts: I) -> Result<Self, AmountOverflow>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |total, amount| {
                total.checked_add(amount).ok_or(AmountOverflow)
            })
    }

    /// Amount as a float, for chart scaling only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "£10.50", "£ 10.5", "10", "1,234.50".
    /// Fractional digits beyond the second are rounded half-up.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.trim().to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('£').unwrap_or(rest).trim_start();

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        let whole = strip_grouping(whole).ok_or_else(invalid)?;

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let pounds: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digits = frac.as_bytes();
        let digit = |i: usize| digits.get(i).map_or(0, |b| i64::from(b - b'0'));
        let mut pence = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            pence += 1;
        }

        let total = pounds
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain decimal form without symbol or grouping (e.g. "1234.50")
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

/// Remove well-formed thousands separators from the integer part
///
/// Returns None when commas are present but do not group digits in threes.
fn strip_grouping(whole: &str) -> Option<String> {
    if !whole.contains(',') {
        return Some(whole.to_string());
    }

    let mut groups = whole.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 {
        return None;
    }

    let mut out = first.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(*self))
    }
}

/// A running total grew past what an `i64` count of pence can hold
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("total is too large to represent (over £92 quadrillion)")]
pub struct AmountOverflow;

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let m = Money::from_pence(1050);
        assert_eq!(m.pence(), 1050);
        assert_eq!(m.pounds(), 10);
        assert_eq!(m.pence_part(), 50);
    }

    #[test]
    fn test_display_uses_currency_format() {
        assert_eq!(Money::from_pence(1050).to_string(), "£10.50");
        assert_eq!(Money::from_pence(0).to_string(), "£0.00");
        assert_eq!(Money::from_pence(123_456_789).to_string(), "£1,234,567.89");
        assert_eq!(Money::from_pence(-500).to_string(), "-£5.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().pence(), 1050);
        assert_eq!(Money::parse("£10.50").unwrap().pence(), 1050);
        assert_eq!(Money::parse(" £ 3.2 ").unwrap().pence(), 320);
        assert_eq!(Money::parse("-10.50").unwrap().pence(), -1050);
        assert_eq!(Money::parse("-£5.00").unwrap().pence(), -500);
        assert_eq!(Money::parse("10").unwrap().pence(), 1000);
        assert_eq!(Money::parse("0.05").unwrap().pence(), 5);
        assert_eq!(Money::parse(".5").unwrap().pence(), 50);
        assert_eq!(Money::parse("1,234.50").unwrap().pence(), 123_450);
        assert_eq!(Money::parse("1,000,000").unwrap().pence(), 100_000_000);
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!(Money::parse("3.205").unwrap().pence(), 321);
        assert_eq!(Money::parse("3.2049").unwrap().pence(), 320);
        assert_eq!(Money::parse("0.995").unwrap().pence(), 100);
        assert_eq!(Money::parse("-0.005").unwrap().pence(), -1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("£").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12,34").is_err());
        assert!(Money::parse(",123").is_err());
        assert!(Money::parse("1e3").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_pence(123_450).to_plain_string(), "1234.50");
        assert_eq!(Money::from_pence(-7).to_plain_string(), "-0.07");
    }

    #[test]
    fn test_checked_add_and_sum() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(550);
        assert_eq!(a.checked_add(b), Some(Money::from_pence(1550)));

        let total = Money::try_sum(vec![a, b, Money::from_pence(-1)]).unwrap();
        assert_eq!(total.pence(), 1549);
        assert_eq!(Money::try_sum(Vec::new()), Ok(Money::zero()));
    }

    #[test]
    fn test_addition_near_the_limit() {
        assert_eq!(
            Money::parse("£92,233,720,368,547,758.07").unwrap().pence(),
            i64::MAX
        );
        assert!(Money::parse("£92,233,720,368,547,758.08").is_err());

        // Fits on its own, but not twice over
        let yacht = Money::parse("£90,000,000,000,000,000.00").unwrap();
        assert_eq!(yacht.pence(), 9_000_000_000_000_000_000);

        assert_eq!(yacht.checked_add(yacht), None);
        assert_eq!(Money::try_sum([yacht, yacht]), Err(AmountOverflow));
        assert_eq!(
            Money::from_pence(i64::MIN).checked_add(Money::from_pence(-1)),
            None
        );
        assert_eq!(
            Money::try_sum([yacht, Money::from_pence(-yacht.pence()), yacht]),
            Ok(yacht)
        );
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_pence(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
