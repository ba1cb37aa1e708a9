use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Parse a sprint id taken from a URL path segment.
///
/// Only `[0-9]+` is accepted, so signs and whitespace are rejected even
/// though `i64::from_str` would take a leading `+`.
#[track_caller]
pub fn parse_sprint_id(raw: &str) -> CoreResult<i64> {
    let invalid = || CoreError::Validation {
        message: format!("Invalid sprint ID: '{}'", raw),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    raw.parse::<i64>().map_err(|_| invalid())
}
