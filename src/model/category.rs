//! Project categories - which list a project lives in

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two mutually exclusive project groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Active,
    Finished,
}

impl Category {
    pub fn all() -> [Category; 2] {
        [Category::Active, Category::Finished]
    }

    /// The list a project from this category is handed off to
    pub fn other(self) -> Category {
        match self {
            Category::Active => Category::Finished,
            Category::Finished => Category::Active,
        }
    }

    /// Label of the action button for an entry in this category
    pub fn button_label(self) -> &'static str {
        match self {
            Category::Active => "Finish",
            Category::Finished => "Activate",
        }
    }

    /// Heading shown above the list
    pub fn title(self) -> &'static str {
        match self {
            Category::Active => "Active Projects",
            Category::Finished => "Finished Projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Active => write!(f, "active"),
            Category::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels() {
        assert_eq!(Category::Active.button_label(), "Finish");
        assert_eq!(Category::Finished.button_label(), "Activate");
    }

    #[test]
    fn test_other_is_an_involution() {
        for category in Category::all() {
            assert_ne!(category.other(), category);
            assert_eq!(category.other().other(), category);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
        let parsed: Category = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, Category::Active);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let parsed: Result<Category, _> = serde_json::from_str("\"actve\"");
        assert!(parsed.is_err());
    }
}
