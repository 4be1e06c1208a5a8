//! Spending categories
//!
//! Categories form a closed set. Each one carries its display metadata so
//! views never look colors or labels up by string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending or income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Salary,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Salary,
        ]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Salary => "Salary",
        }
    }

    /// Accent color used by charts and progress bars
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "orange",
            Self::Transport => "blue",
            Self::Shopping => "purple",
            Self::Bills => "green",
            Self::Entertainment => "pink",
            Self::Salary => "indigo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Returned when text does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        write!(f, "Unknown category '{}' (expected one of: {})", self.0, known.join(", "))
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Entertainment ".parse::<Category>().unwrap(), Category::Entertainment);
        assert!("Groceries".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_every_category_has_metadata() {
        for category in Category::all() {
            assert!(!category.name().is_empty());
            assert!(!category.color().is_empty());
            assert_eq!(category.name().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_unknown_category_message() {
        let err = "Rent".parse::<Category>().unwrap_err();
        assert!(err.to_string().starts_with("Unknown category 'Rent'"));
        assert!(err.to_string().contains("Salary"));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Category::Bills).unwrap(), "\"bills\"");
    }
}
