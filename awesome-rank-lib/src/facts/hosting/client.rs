//! GitHub API client
//!
//! Minimal GitHub API client for fetching READMEs, repository summaries and issue search results.

use super::api::{HostingApi, IssueState, IssueStats, RepoSummary};
use crate::facts::{CollectionError, CollectionErrorCode, License};
use chrono::{DateTime, Utc};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "   hosting";
const USER_AGENT: &str = "awesome-rank";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

/// Default GitHub REST API location
pub const GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct Repository {
    stargazers_count: u64,
    forks_count: u64,
    #[serde(default)]
    license: Option<License>,
}

#[derive(Debug, Deserialize)]
struct IssueSearch {
    total_count: u64,
    #[serde(default)]
    items: Vec<IssueSearchItem>,
}

/// Minimal issue info with only the fields we need
#[derive(Debug, Deserialize)]
struct IssueSearchItem {
    created_at: DateTime<Utc>,
}

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
struct RateLimitInfo {
    remaining: usize,
    reset_at: DateTime<Utc>,
}

/// Hosting API client for GitHub
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new hosting API client with optional authentication token, base URL and per-request timeout
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        let mut client_builder = reqwest::Client::builder().user_agent(USER_AGENT).timeout(timeout);

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Construct API URL for a repository with optional path suffix
    fn repo_url(&self, owner: &str, repo: &str, suffix: &str) -> String {
        format!("{}/repos/{owner}/{repo}{suffix}", self.base_url)
    }

    fn search_issues_url(&self, owner: &str, repo: &str, since: DateTime<Utc>, state: IssueState) -> Result<Url, CollectionError> {
        let mut url = Url::parse(&format!("{}/search/issues", self.base_url)).map_err(|e| {
            CollectionError::new(
                CollectionErrorCode::UpstreamFailure,
                format!("invalid API base URL '{}': {e}", self.base_url),
            )
        })?;

        let query = format!("repo:{owner}/{repo} type:issue state:{state} created:>{}", since.format("%Y-%m-%d"));
        let _ = url
            .query_pairs_mut()
            .append_pair("q", &query)
            .append_pair("sort", "created")
            .append_pair("order", "desc")
            .append_pair("per_page", "1");

        Ok(url)
    }

    /// Make an API call and classify the result
    async fn api_call(&self, url: &str, accept: &'static str) -> Result<reqwest::Response, CollectionError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| CollectionError::new(CollectionErrorCode::UpstreamFailure, format!("request to {url} failed: {e}")))?;

        let rate_limit = extract_rate_limit_from_headers(resp.headers());
        if let Some(rl) = &rate_limit {
            log::trace!(target: LOG_TARGET, "API quota: {} request(s) remaining, resets at {}", rl.remaining, rl.reset_at);
        }

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let code = classify_status(status);
        let message = match code {
            CollectionErrorCode::RateLimited => rate_limit.map_or_else(
                || "API rate limit exceeded".to_string(),
                |rl| {
                    format!(
                        "API rate limit exceeded, quota resets at {}",
                        rl.reset_at.with_timezone(&chrono::Local).format("%T")
                    )
                },
            ),
            CollectionErrorCode::NotFoundOrUnauthorized => format!("API not found or invalid token ({status}) for {url}"),
            CollectionErrorCode::MalformedResponse | CollectionErrorCode::UpstreamFailure => {
                format!("request failed with status {status} for {url}")
            }
        };

        log::debug!(target: LOG_TARGET, "{message}");
        Err(CollectionError::new(code, message))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T, CollectionError> {
        let resp = self.api_call(url, JSON_MEDIA_TYPE).await?;
        resp.json().await.map_err(|e| {
            CollectionError::new(
                CollectionErrorCode::MalformedResponse,
                format!("couldn't parse {what}, received an invalid JSON object: {e}"),
            )
        })
    }
}

impl HostingApi for Client {
    async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<String, CollectionError> {
        let url = self.repo_url(owner, repo, "/readme");
        log::debug!(target: LOG_TARGET, "Fetching README of '{owner}/{repo}'");

        let resp = self.api_call(&url, RAW_MEDIA_TYPE).await?;
        resp.text().await.map_err(|e| {
            CollectionError::new(
                CollectionErrorCode::MalformedResponse,
                format!("couldn't read README of '{owner}/{repo}': {e}"),
            )
        })
    }

    async fn fetch_repo_summary(&self, owner: &str, repo: &str) -> Result<RepoSummary, CollectionError> {
        let url = self.repo_url(owner, repo, "");
        let repository: Repository = self.get_json(&url, &format!("repo info for '{owner}/{repo}'")).await?;

        Ok(RepoSummary {
            stars: repository.stargazers_count,
            forks: repository.forks_count,
            license: repository.license,
        })
    }

    async fn fetch_issue_stats(
        &self,
        owner: &str,
        repo: &str,
        since: DateTime<Utc>,
        state: IssueState,
    ) -> Result<IssueStats, CollectionError> {
        let url = self.search_issues_url(owner, repo, since, state)?;
        let search: IssueSearch = self
            .get_json(url.as_str(), &format!("issues info for '{owner}/{repo}'"))
            .await?;

        Ok(IssueStats {
            total_count: search.total_count,
            most_recent_created_at: search.items.first().map(|item| item.created_at),
        })
    }
}

/// Map a non-success HTTP status to an error code
fn classify_status(status: StatusCode) -> CollectionErrorCode {
    match status.as_u16() {
        403 | 429 => CollectionErrorCode::RateLimited,
        401 | 404 => CollectionErrorCode::NotFoundOrUnauthorized,
        _ => CollectionErrorCode::UpstreamFailure,
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
