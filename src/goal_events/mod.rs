//! Goal extraction from the match `goal` XML column.
//!
//! The XML holds one `value` entry per event. Entries with a `stats/goals`,
//! `stats/penalties` or `stats/owngoals` node are goals; anything else
//! (cards, corners, substitutions) is skipped.

pub mod extractor;
pub mod models;
pub mod xml_tree;

pub use extractor::extract_goals;
pub use models::{GoalRecord, GoalType, Scorer};
pub use xml_tree::Element;
