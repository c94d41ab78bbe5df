//! The end-to-end ranking run.
//!
//! A run fetches the README of the root repository, extracts the entries it links to, collects
//! metadata for each of them one at a time, and ranks the complete set once. The first failure
//! of any step ends the run; nothing is ranked over a partial set.

use crate::Error;
use crate::facts::hosting::HostingApi;
use crate::facts::{CollectionConfig, Entry, MetadataCollector, Progress, extract_entries};
use crate::ranking::{RankedEntry, RankingConfig, RatingEngine};
use chrono::{DateTime, Utc};

const LOG_TARGET: &str = "  pipeline";

/// Drives discovery, collection and ranking over one hosting service.
#[derive(Debug)]
pub struct Pipeline<A> {
    api: A,
    collection: CollectionConfig,
    engine: RatingEngine,
    host: String,
}

impl<A: HostingApi> Pipeline<A> {
    /// Create a pipeline whose index links point at `host` (e.g. `github.com`).
    #[must_use]
    pub fn new(api: A, collection: CollectionConfig, ranking: RankingConfig, host: impl Into<String>) -> Self {
        Self {
            api,
            collection,
            engine: RatingEngine::new(ranking),
            host: host.into(),
        }
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Rank every repository listed in the README of `root_owner/root_repo`.
    ///
    /// When `limit` is `Some(n)` with `n > 0`, only the first `n` discovered entries are collected and ranked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetadataCollection`] if any request to the hosting service fails,
    /// [`Error::Parsing`] if the README lists no entries, and [`Error::Ranking`] if too few
    /// entries remain to fill every bin.
    pub async fn run(
        &self,
        root_owner: &str,
        root_repo: &str,
        limit: Option<usize>,
        now: DateTime<Utc>,
        progress: &dyn Progress,
    ) -> Result<Vec<RankedEntry>, Error> {
        progress.set_phase("Discovering");
        let root = Entry::new(root_repo, &self.host, root_owner, root_repo, "");
        let mut entries = self.discover(&root).await?;

        if let Some(limit) = limit.filter(|&n| n > 0)
            && entries.len() > limit
        {
            log::info!(target: LOG_TARGET, "Limiting the run to the first {limit} of {} entries", entries.len());
            entries.truncate(limit);
        }

        progress.set_phase("Collecting");
        let collected = self.collect_all(entries, now, progress).await;
        progress.done();
        let collected = collected?;

        log::info!(target: LOG_TARGET, "Ranking {} entries", collected.len());
        let scored = self.engine.rank(&collected)?;

        Ok(RatingEngine::serialize(&scored))
    }

    /// Fetch the root README and extract the entries it lists.
    async fn discover(&self, root: &Entry) -> Result<Vec<Entry>, Error> {
        let index_name = format!("{}/{}", root.owner(), root.repo());
        log::info!(target: LOG_TARGET, "Reading index {}", root.url());

        let readme = self.api.fetch_readme(root.owner(), root.repo()).await?;
        let entries = extract_entries(&readme, &self.host, &index_name)?;

        log::info!(target: LOG_TARGET, "Found {} entries in '{index_name}'", entries.len());
        Ok(entries)
    }

    async fn collect_all(&self, entries: Vec<Entry>, now: DateTime<Utc>, progress: &dyn Progress) -> Result<Vec<Entry>, Error> {
        let collector = MetadataCollector::new(&self.api, self.collection);
        let total = entries.len();
        progress.set_total(total as u64);

        let mut collected = Vec::with_capacity(total);
        for (index, entry) in entries.into_iter().enumerate() {
            progress.advance(index as u64, entry.friendly_name());

            let name = format!("{}/{}", entry.owner(), entry.repo());
            let entry = collector
                .collect(entry, now)
                .await
                .inspect_err(|e| log::warn!(target: LOG_TARGET, "Could not collect metadata for '{name}': {e}"))?;

            collected.push(entry);
        }

        progress.advance(total as u64, "");
        Ok(collected)
    }
}
