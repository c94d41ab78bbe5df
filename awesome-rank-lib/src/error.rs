use crate::facts::CollectionError;
use thiserror::Error;

/// Failures that abort a ranking run.
///
/// None of these are recovered from locally; any of them ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The index document did not contain a single recognizable entry.
    #[error("could not find any repository entries in the index document of '{repo}'")]
    Parsing { repo: String },

    /// Fetching the facts for one entry (or the index document itself) failed.
    #[error(transparent)]
    MetadataCollection(#[from] CollectionError),

    /// Too few entries to split into the configured number of bins.
    #[error("ranking into {required} bins requires at least {required} entries, but only {actual} were collected")]
    Ranking { required: usize, actual: usize },
}

impl Error {
    /// Short, stable name of the error kind for user-facing reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Parsing { .. } => "ParsingError",
            Self::MetadataCollection(_) => "MetadataCollectionError",
            Self::Ranking { .. } => "RankingError",
        }
    }
}
