use crate::facts::{CollectionError, License};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// The operations the metadata collector and the pipeline need from a hosting service.
///
/// Every operation fails with a [`CollectionError`] whose code follows the same taxonomy:
/// rate limiting, not found / unauthorized, malformed response, or any other upstream failure.
pub trait HostingApi: Send + Sync {
    /// Fetch the raw markdown text of a repository's README.
    fn fetch_readme(&self, owner: &str, repo: &str) -> impl Future<Output = Result<String, CollectionError>> + Send;

    /// Fetch star count, fork count and license of a repository.
    fn fetch_repo_summary(&self, owner: &str, repo: &str) -> impl Future<Output = Result<RepoSummary, CollectionError>> + Send;

    /// Count the issues in `state` created after `since`, and find the newest one.
    fn fetch_issue_stats(
        &self,
        owner: &str,
        repo: &str,
        since: DateTime<Utc>,
        state: IssueState,
    ) -> impl Future<Output = Result<IssueStats, CollectionError>> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoSummary {
    pub stars: u64,
    pub forks: u64,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueStats {
    /// Total number of matching issues as reported by the API, not the size of a result page.
    pub total_count: u64,

    /// Creation time of the most recently created matching issue.
    pub most_recent_created_at: Option<DateTime<Utc>>,
}

/// Issue state filter: open or closed
///
/// Any other value is treated as `open` rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
}

impl IssueState {
    /// Interpret a user-supplied state, falling back to `open` for unrecognized values.
    #[must_use]
    pub fn parse_lenient(state: &str) -> Self {
        if state.trim().eq_ignore_ascii_case("closed") {
            Self::Closed
        } else {
            Self::Open
        }
    }
}

impl From<String> for IssueState {
    fn from(state: String) -> Self {
        Self::parse_lenient(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_state_known_values() {
        assert_eq!(IssueState::parse_lenient("open"), IssueState::Open);
        assert_eq!(IssueState::parse_lenient("closed"), IssueState::Closed);
        assert_eq!(IssueState::parse_lenient("CLOSED"), IssueState::Closed);
    }

    #[test]
    fn test_issue_state_unknown_values_become_open() {
        assert_eq!(IssueState::parse_lenient("all"), IssueState::Open);
        assert_eq!(IssueState::parse_lenient(""), IssueState::Open);
        assert_eq!(IssueState::parse_lenient("merged"), IssueState::Open);
    }

    #[test]
    fn test_issue_state_deserialize_is_lenient() {
        let state: IssueState = serde_json::from_str(r#""closed""#).unwrap();
        assert_eq!(state, IssueState::Closed);

        let state: IssueState = serde_json::from_str(r#""whatever""#).unwrap();
        assert_eq!(state, IssueState::Open);
    }

    #[test]
    fn test_issue_state_display_and_serialize() {
        assert_eq!(IssueState::Open.to_string(), "open");
        assert_eq!(IssueState::Closed.to_string(), "closed");
        assert_eq!(serde_json::to_string(&IssueState::Closed).unwrap(), r#""closed""#);
    }
}
