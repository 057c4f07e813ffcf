//! Spending category labels.

use serde::{Deserialize, Serialize};

/// The closed set of spending categories the engine can produce.
///
/// Serialized as the human-readable label (e.g. `"Food & Dining"`), which is
/// the exact string clients receive on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Groceries, restaurants, cafes.
    #[serde(rename = "Food & Dining")]
    FoodAndDining,

    /// Fuel, ride-sharing, transit.
    Transportation,

    /// Streaming and subscription services.
    Entertainment,

    /// Salary, payroll, deposits.
    Income,

    /// Nothing matched; the fallback category.
    #[default]
    Other,
}

impl Category {
    /// Returns the category label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::FoodAndDining.to_string(), "Food & Dining");
        assert_eq!(Category::Transportation.to_string(), "Transportation");
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
        assert_eq!(Category::Income.to_string(), "Income");
        assert_eq!(Category::Other.to_string(), "Other");
    }

    #[test]
    fn test_serializes_to_wire_label() {
        let json = serde_json::to_string(&Category::FoodAndDining).unwrap();
        assert_eq!(json, "\"Food & Dining\"");
    }

    #[test]
    fn test_serialization_round_trip() {
        let category = Category::Entertainment;
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
