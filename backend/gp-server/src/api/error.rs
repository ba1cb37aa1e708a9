//! REST API error types
//!
//! Every error leaves the server as `{"error": "<message>"}` with the
//! status code of its variant.

use crate::SprintError;

use gp_github::GithubError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Missing caller credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream service failed or answered with an error (502)
    #[error("Bad gateway: {message} {location}")]
    BadGateway {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::Validation { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. }
            | ApiError::BadGateway { message, .. } => message,
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert sprint service errors to API errors
impl From<SprintError> for ApiError {
    #[track_caller]
    fn from(e: SprintError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            SprintError::Validation { message, .. } => ApiError::Validation { message, location },
            SprintError::NotFound { .. } => ApiError::NotFound {
                message: crate::service::sprint_error::SPRINT_NOT_FOUND.to_string(),
                location,
            },
            // The driver's message goes to the client unchanged
            SprintError::Storage { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Convert GitHub relay errors to API errors
impl From<GithubError> for ApiError {
    #[track_caller]
    fn from(e: GithubError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            GithubError::Filter { .. } => ApiError::Validation {
                message: "Invalid issue filter".to_string(),
                location,
            },
            GithubError::Upstream { .. }
            | GithubError::Http { .. }
            | GithubError::Json { .. }
            | GithubError::Url { .. } => ApiError::BadGateway {
                message: e.message(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
