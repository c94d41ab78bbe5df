use crate::facts::EntryMetadata;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A collected fact that entries can be ranked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RankingField {
    /// Creation time of the newest issue in the window. Entries without issues hold the lowest value.
    LastIssueRecency,

    /// Number of issues opened within the window.
    IssuesCount,

    ForksCount,
    Stars,
}

impl RankingField {
    /// Raw value of this field for the given metadata, widened so every field compares the same way.
    #[must_use]
    pub fn value(self, metadata: &EntryMetadata) -> i128 {
        match self {
            Self::LastIssueRecency => i128::from(metadata.last_issue_timestamp),
            Self::IssuesCount => i128::from(metadata.issues_count),
            Self::ForksCount => i128::from(metadata.forks),
            Self::Stars => i128::from(metadata.stars),
        }
    }
}

/// Which end of a field's value range is desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    /// Smaller raw values are better, e.g. fewer open issues.
    LowerIsBetter,

    /// Larger raw values are better, e.g. more stars.
    HigherIsBetter,
}

impl SortDirection {
    /// Points a field contributes to the composite score for an entry in bin `label` out of `bins`.
    ///
    /// Always in `1..=bins`.
    #[must_use]
    pub const fn contribution(self, label: usize, bins: usize) -> usize {
        match self {
            Self::LowerIsBetter => bins - label,
            Self::HigherIsBetter => label + 1,
        }
    }
}

/// One field of the ranking configuration, together with the direction it is judged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldRanking {
    pub field: RankingField,
    pub direction: SortDirection,
}

impl FieldRanking {
    #[must_use]
    pub const fn new(field: RankingField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}
