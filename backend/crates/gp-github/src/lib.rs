//! GitHub issue relay.
//!
//! Lists a repository's issues on behalf of a caller who supplies their own
//! access token. Nothing here knows about sprints.

mod client;
mod error;
mod issue_filter;


pub use client::GithubClient;
pub use error::{GithubError, Result as GithubResult};
pub use issue_filter::IssueFilter;

/// Media type GitHub recommends for REST v3 requests
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";
