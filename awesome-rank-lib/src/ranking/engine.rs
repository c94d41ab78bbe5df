use super::decile;
use super::{FieldRanking, RankedEntry, RankingField, SortDirection};
use crate::Error;
use crate::facts::Entry;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "   ranking";

/// Immutable settings of a [`RatingEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Number of equal-population bins each field is cut into.
    pub bins: usize,

    /// Fields to rank on. Order affects iteration only, never the score.
    pub fields: Vec<FieldRanking>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            bins: 10,
            fields: vec![
                FieldRanking::new(RankingField::LastIssueRecency, SortDirection::HigherIsBetter),
                FieldRanking::new(RankingField::IssuesCount, SortDirection::LowerIsBetter),
                FieldRanking::new(RankingField::ForksCount, SortDirection::HigherIsBetter),
                FieldRanking::new(RankingField::Stars, SortDirection::HigherIsBetter),
            ],
        }
    }
}

impl RankingConfig {
    /// Lowest and highest composite score this configuration can produce.
    #[must_use]
    pub fn score_range(&self) -> (usize, usize) {
        (self.fields.len(), self.fields.len() * self.bins)
    }
}

/// An entry together with its composite score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    entry: Entry,
    labels: Vec<usize>,
    awesomeness: usize,
}

impl ScoredEntry {
    #[must_use]
    pub const fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Bin label per ranking field, in configuration order.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    #[must_use]
    pub const fn awesomeness(&self) -> usize {
        self.awesomeness
    }
}

/// Multi-field decile scoring of a complete set of entries.
///
/// For every configured field the entries are ranked ascending (ties keep input order), the
/// ranks are cut into `bins` equal-population bins, and each bin label is turned into points
/// according to the field's [`SortDirection`]. An entry's awesomeness is the sum of its points.
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    config: RankingConfig,
}

impl RatingEngine {
    #[must_use]
    pub const fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score every entry, returning them in input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ranking`] when there are fewer entries than bins.
    pub fn rank(&self, entries: &[Entry]) -> Result<Vec<ScoredEntry>, Error> {
        let bins = self.config.bins;
        if entries.len() < bins {
            return Err(Error::Ranking {
                required: bins,
                actual: entries.len(),
            });
        }

        let mut scored: Vec<ScoredEntry> = entries
            .iter()
            .map(|entry| ScoredEntry {
                entry: entry.clone(),
                labels: Vec::with_capacity(self.config.fields.len()),
                awesomeness: 0,
            })
            .collect();

        for ranking in &self.config.fields {
            let values: Vec<i128> = entries.iter().map(|entry| ranking.field.value(entry.metadata())).collect();

            for (item, label) in scored.iter_mut().zip(decile::labels(&values, bins)) {
                item.labels.push(label);
                item.awesomeness += ranking.direction.contribution(label, bins);
            }
        }

        log::debug!(target: LOG_TARGET, "Ranked {} entries on {} field(s) into {bins} bins", entries.len(), self.config.fields.len());

        Ok(scored)
    }

    /// Turn scored entries into their display-ready form, keeping their order.
    #[must_use]
    pub fn serialize(scored: &[ScoredEntry]) -> Vec<RankedEntry> {
        scored
            .iter()
            .map(|item| RankedEntry {
                awesomeness: item.awesomeness,
                description: item.entry.description().to_string(),
                license: item.entry.metadata().license.clone(),
                link: item.entry.url(),
            })
            .collect()
    }
}
