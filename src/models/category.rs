//! Expense categories
//!
//! New expenses are always filed under one of five fixed categories. Entries
//! decoded from stored strings may carry any other parenthesised label, which
//! is kept verbatim as [`Category::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
    /// A label outside the fixed set, as found in a decoded string
    Other(String),
}

impl Category {
    /// The categories offered when recording a new expense, in menu order
    pub const KNOWN: [Category; 5] = [
        Category::Food,
        Category::Home,
        Category::Work,
        Category::Fun,
        Category::Misc,
    ];

    /// Display name of the category
    pub fn name(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Home => "Home",
            Category::Work => "Work",
            Category::Fun => "Fun",
            Category::Misc => "Misc",
            Category::Other(label) => label,
        }
    }

    /// Map a label onto a known category (case-insensitive), or keep it as-is
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::KNOWN
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(label))
            .cloned()
            .unwrap_or_else(|| Category::Other(label.to_string()))
    }

    /// Whether this is one of the five fixed categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Strict parsing for user input: only the fixed categories are accepted.
/// A 1-based menu number ("1" = Food) is accepted as well.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            if (1..=Self::KNOWN.len()).contains(&index) {
                return Ok(Self::KNOWN[index - 1].clone());
            }
        }

        match Self::from_label(s) {
            Category::Other(_) => Err(format!(
                "unknown category '{}' (expected one of: Food, Home, Work, Fun, Misc)",
                s
            )),
            known => Ok(known),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("Food"), Category::Food);
        assert_eq!(Category::from_label(" fun "), Category::Fun);
        assert_eq!(
            Category::from_label("Drink"),
            Category::Other("Drink".to_string())
        );
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("home".parse::<Category>().unwrap(), Category::Home);
        assert_eq!("1".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("5".parse::<Category>().unwrap(), Category::Misc);
        assert!("6".parse::<Category>().is_err());
        assert!("Drink".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_keeps_other_verbatim() {
        assert_eq!(Category::Work.to_string(), "Work");
        assert_eq!(Category::Other("Drink".into()).to_string(), "Drink");
        assert!(!Category::Other("Drink".into()).is_known());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Misc).unwrap();
        assert_eq!(json, "\"Misc\"");
        let back: Category = serde_json::from_str("\"food\"").unwrap();
        assert_eq!(back, Category::Food);
    }
}
