//! Access to the code hosting service.
//!
//! [`HostingApi`] describes the three operations the rest of the crate needs, and
//! [`Client`] implements them against the GitHub REST API.

mod api;
mod client;

pub use api::{HostingApi, IssueState, IssueStats, RepoSummary};
pub use client::{Client, GITHUB_API_URL};
