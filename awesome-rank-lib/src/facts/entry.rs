use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// License information as reported by the hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spdx_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub node_id: Option<String>,
}

/// Popularity and health facts about a repository.
///
/// All values are zero (or `None`) until the metadata collector fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub stars: u64,
    pub forks: u64,
    pub license: Option<License>,

    /// Number of issues in the configured state opened within the trailing window.
    pub issues_count: u64,

    /// Creation time (epoch seconds) of the newest issue in the trailing window, or 0 if there is none.
    pub last_issue_timestamp: i64,
}

/// One repository listed in an index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    friendly_name: Box<str>,
    host: Box<str>,
    owner: Box<str>,
    repo: Box<str>,
    description: Box<str>,
    metadata: EntryMetadata,
}

impl Entry {
    #[must_use]
    pub fn new(friendly_name: &str, host: &str, owner: &str, repo: &str, description: &str) -> Self {
        Self {
            friendly_name: Box::from(friendly_name),
            host: Box::from(host),
            owner: Box::from(owner),
            repo: Box::from(repo),
            description: Box::from(description),
            metadata: EntryMetadata::default(),
        }
    }

    /// Attach the collected facts, consuming the bare entry.
    #[must_use]
    pub fn with_metadata(self, metadata: EntryMetadata) -> Self {
        Self { metadata, ..self }
    }

    #[must_use]
    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    /// Browsable location of the repository, always derived from host, owner and repo.
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.repo)
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "* [{}] {} - {}.", self.friendly_name, self.url(), self.description)
    }
}
