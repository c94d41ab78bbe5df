use super::hosting::{HostingApi, IssueState};
use super::{CollectionError, Entry, EntryMetadata};
use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = " collector";

/// Settings that shape what the collector asks the hosting service for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Length of the trailing issue window, in calendar months.
    pub window_months: u32,

    /// Which issues count toward activity.
    pub issue_state: IssueState,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            window_months: 6,
            issue_state: IssueState::Open,
        }
    }
}

/// Fills in the popularity and activity facts of an [`Entry`].
///
/// Each call to [`collect`](Self::collect) issues exactly two requests: one for the
/// repository summary and one issue search. Nothing is cached between entries.
#[derive(Debug)]
pub struct MetadataCollector<'a, A> {
    api: &'a A,
    config: CollectionConfig,
}

impl<'a, A: HostingApi> MetadataCollector<'a, A> {
    #[must_use]
    pub const fn new(api: &'a A, config: CollectionConfig) -> Self {
        Self { api, config }
    }

    #[must_use]
    pub const fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Start of the issue window for a run happening at `now`.
    #[must_use]
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.config.window_months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Fetch the facts of `entry` and return it with its metadata attached.
    ///
    /// The first failing request ends collection for the entry; its error is returned untouched.
    pub async fn collect(&self, entry: Entry, now: DateTime<Utc>) -> Result<Entry, CollectionError> {
        let owner = entry.owner();
        let repo = entry.repo();

        log::debug!(target: LOG_TARGET, "Collecting metadata for '{owner}/{repo}'");

        let summary = self.api.fetch_repo_summary(owner, repo).await?;

        let since = self.window_start(now);
        let issues = self.api.fetch_issue_stats(owner, repo, since, self.config.issue_state).await?;

        let last_issue_timestamp = issues.most_recent_created_at.map_or(0, |created_at| created_at.timestamp());

        log::debug!(
            target: LOG_TARGET,
            "'{owner}/{repo}': {} star(s), {} fork(s), {} {} issue(s) since {}",
            summary.stars,
            summary.forks,
            issues.total_count,
            self.config.issue_state,
            since.format("%Y-%m-%d")
        );

        let metadata = EntryMetadata {
            stars: summary.stars,
            forks: summary.forks,
            license: summary.license,
            issues_count: issues.total_count,
            last_issue_timestamp,
        };

        Ok(entry.with_metadata(metadata))
    }
}
