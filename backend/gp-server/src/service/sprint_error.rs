use gp_core::CoreError;
use gp_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Message for a path id that is not a non-negative 64-bit integer
pub const INVALID_SPRINT_ID: &str = "Invalid sprint ID";
/// Message for a body that does not decode as a sprint
pub const INVALID_REQUEST_PAYLOAD: &str = "Invalid request payload";
pub const SPRINT_NOT_FOUND: &str = "Sprint not found";

/// Everything a sprint operation can fail with.
#[derive(Error, Debug)]
pub enum SprintError {
    /// Rejected before the datastore was touched
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Sprint {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    /// The datastore failed; `message` is the driver's text.
    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl SprintError {
    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        SprintError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        SprintError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for SprintError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        SprintError::Storage {
            message: source.message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Decoding failures collapse to the two fixed client messages.
impl From<CoreError> for SprintError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        log::debug!("Rejected sprint input: {}", e);

        match e {
            CoreError::Validation { field, message, .. } => match field.as_deref() {
                Some("id") => SprintError::validation(INVALID_SPRINT_ID),
                _ => SprintError::validation(message),
            },
            CoreError::Payload { .. } => SprintError::validation(INVALID_REQUEST_PAYLOAD),
        }
    }
}

pub type Result<T> = std::result::Result<T, SprintError>;
