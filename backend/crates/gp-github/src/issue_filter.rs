use crate::{GithubError, GithubResult};

use serde::Deserialize;

/// Query options for `GET /repos/{owner}/{repo}/issues`.
///
/// Every field is optional; unset fields are left to GitHub's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IssueFilter {
    /// Milestone number, `*` or `none`
    pub milestone: Option<String>,
    /// `open`, `closed` or `all`
    pub state: Option<String>,
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub mentioned: Option<String>,
    pub labels: Vec<String>,
    /// `created`, `updated` or `comments`
    pub sort: Option<String>,
    pub direction: Option<String>,
    /// ISO 8601 timestamp
    pub since: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl IssueFilter {
    /// Decode a request body. An empty (or all-whitespace) body is no filter.
    #[track_caller]
    pub fn from_json_slice(body: &[u8]) -> GithubResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(GithubError::from_filter)
    }

    /// Query string pairs in GitHub's parameter names. Labels are comma-joined.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let text_fields = [
            ("milestone", &self.milestone),
            ("state", &self.state),
            ("assignee", &self.assignee),
            ("creator", &self.creator),
            ("mentioned", &self.mentioned),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }

        if !self.labels.is_empty() {
            pairs.push(("labels", self.labels.join(",")));
        }

        for (key, value) in [
            ("sort", &self.sort),
            ("direction", &self.direction),
            ("since", &self.since),
        ] {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }

        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }

        pairs
    }
}
