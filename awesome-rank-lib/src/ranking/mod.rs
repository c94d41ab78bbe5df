//! Composite "awesomeness" scoring.
//!
//! The [`RatingEngine`] turns heterogeneous raw facts into one comparable integer per entry by
//! cutting each configured field into equal-population bins and summing the per-field points.

mod decile;
mod engine;
mod ranked_entry;
mod ranking_field;

pub use engine::{RankingConfig, RatingEngine, ScoredEntry};
pub use ranked_entry::RankedEntry;
pub use ranking_field::{FieldRanking, RankingField, SortDirection};
