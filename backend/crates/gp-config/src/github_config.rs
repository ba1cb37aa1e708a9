use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GITHUB_API_BASE_URL, DEFAULT_GITHUB_ENABLED,
    DEFAULT_GITHUB_TIMEOUT_SECS, DEFAULT_GITHUB_USER_AGENT, MAX_GITHUB_TIMEOUT_SECS,
    MIN_GITHUB_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Issue relay (`GET /metrics/{owner}/{repository}`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// When false the relay route is not registered
    pub enabled: bool,
    pub api_base_url: String,
    /// GitHub rejects requests without a User-Agent
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_GITHUB_ENABLED,
            api_base_url: String::from(DEFAULT_GITHUB_API_BASE_URL),
            user_agent: String::from(DEFAULT_GITHUB_USER_AGENT),
            timeout_secs: DEFAULT_GITHUB_TIMEOUT_SECS,
        }
    }
}

impl GithubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ConfigError::github(format!(
                "github.api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::github("github.user_agent cannot be empty"));
        }

        if self.timeout_secs < MIN_GITHUB_TIMEOUT_SECS || self.timeout_secs > MAX_GITHUB_TIMEOUT_SECS
        {
            return Err(ConfigError::github(format!(
                "github.timeout_secs must be {}-{}, got {}",
                MIN_GITHUB_TIMEOUT_SECS, MAX_GITHUB_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
