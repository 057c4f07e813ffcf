//! Rule-based transaction categorization.
//!
//! Maps a free-text transaction description to a spending category using an
//! ordered table of keyword rules. This is a placeholder for a learned model:
//! confidences are fixed per rule, not computed probabilities.

mod category;
mod rules;

pub use category::Category;
pub use rules::{Categorization, CategoryRule, METHOD, RULES, categorize};
