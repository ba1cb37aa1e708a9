use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while relaying an issue query
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub returned {status}: {message} {location}")]
    Upstream {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue filter: {message} {location}")]
    Filter {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },
}

impl GithubError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GithubError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// A filter body that could not be decoded
    #[track_caller]
    pub fn from_filter(err: serde_json::Error) -> Self {
        GithubError::Filter {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        GithubError::Upstream {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url(message: impl Into<String>) -> Self {
        GithubError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the source location, suitable for a response body.
    pub fn message(&self) -> String {
        match self {
            GithubError::Http { message, .. }
            | GithubError::Filter { message, .. }
            | GithubError::Json { message, .. }
            | GithubError::Url { message, .. } => message.clone(),
            GithubError::Upstream {
                status, message, ..
            } => format!("GitHub returned {}: {}", status, message),
        }
    }
}

impl From<reqwest::Error> for GithubError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GithubError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GithubError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GithubError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, GithubError>;
