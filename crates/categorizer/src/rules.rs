//! Ordered keyword rules and the first-match-wins engine.

use serde::Serialize;

use crate::Category;

/// Tag reported alongside every result until a real model replaces the rules.
pub const METHOD: &str = "rule-based-placeholder";

/// Confidence attached to descriptions that match no rule.
const FALLBACK_CONFIDENCE: f64 = 0.50;

/// A single categorization rule.
///
/// A rule matches when the lowercased description contains any of its
/// keywords as a plain substring.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
    pub confidence: f64,
}

/// The rule table, evaluated in order with first-match-wins resolution.
///
/// Order is significant and confidences are fixed constants. Neither is
/// derived from data.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["grocery", "food", "restaurant", "cafe"],
        category: Category::FoodAndDining,
        confidence: 0.85,
    },
    CategoryRule {
        keywords: &["gas", "fuel", "transport", "uber", "taxi"],
        category: Category::Transportation,
        confidence: 0.80,
    },
    CategoryRule {
        keywords: &["netflix", "spotify", "subscription", "streaming"],
        category: Category::Entertainment,
        confidence: 0.90,
    },
    CategoryRule {
        keywords: &["salary", "payroll", "income", "deposit"],
        category: Category::Income,
        confidence: 0.95,
    },
];

/// The outcome of categorizing one description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Categorization {
    pub category: Category,
    pub confidence: f64,
    pub method: &'static str,
}

/// Categorizes a transaction description.
///
/// Matching is case-insensitive substring containment: the input is
/// lowercased and nothing else — no trimming, no tokenization, no word
/// boundaries (so "gaslight" matches the "gas" keyword). Descriptions that
/// match no rule, including the empty string, fall through to
/// [`Category::Other`].
///
/// Pure function of the input and the static rule table; identical inputs
/// always produce identical results.
pub fn categorize(description: &str) -> Categorization {
    let normalized = description.to_lowercase();

    for rule in RULES {
        if rule.keywords.iter().any(|kw| normalized.contains(kw)) {
            return Categorization {
                category: rule.category,
                confidence: rule.confidence,
                method: METHOD,
            };
        }
    }

    Categorization {
        category: Category::Other,
        confidence: FALLBACK_CONFIDENCE,
        method: METHOD,
    }
}
