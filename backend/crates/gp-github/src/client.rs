use crate::{
    GITHUB_API_VERSION, GITHUB_API_VERSION_HEADER, GITHUB_MEDIA_TYPE, GithubError, GithubResult,
    IssueFilter,
};

use std::time::Duration;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;

/// HTTP client for the GitHub REST API.
///
/// Holds no credentials; each call carries the caller's token.
#[derive(Debug, Clone)]
pub struct GithubClient {
    base_url: Url,
    client: ReqwestClient,
}

impl GithubClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.github.com")
    /// * `user_agent` - Sent on every request; GitHub rejects requests without one
    /// * `timeout` - Whole-request timeout
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> GithubResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GithubError::url(format!("'{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(GithubError::url(format!(
                "'{}' cannot be used as a base URL",
                base_url
            )));
        }

        let client = ReqwestClient::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/repos/{owner}/{repository}/issues?{filter}`
    pub fn issues_url(
        &self,
        owner: &str,
        repository: &str,
        filter: &IssueFilter,
    ) -> GithubResult<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| GithubError::url(format!("'{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["repos", owner, repository, "issues"]);

        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// List issues of `owner/repository`, authenticated with `token`.
    ///
    /// Returns GitHub's JSON untouched. A non-success status becomes
    /// [`GithubError::Upstream`] carrying GitHub's own `message` when present.
    pub async fn list_repository_issues(
        &self,
        token: &str,
        owner: &str,
        repository: &str,
        filter: &IssueFilter,
    ) -> GithubResult<Value> {
        let url = self.issues_url(owner, repository, filter)?;
        debug!("Fetching issues: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(GithubError::upstream(
                status.as_u16(),
                Self::upstream_message(&body),
            ));
        }

        let issues: Value = serde_json::from_slice(&body)?;
        Ok(issues)
    }

    /// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
    pub(crate) fn upstream_message(body: &[u8]) -> String {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
    }
}
