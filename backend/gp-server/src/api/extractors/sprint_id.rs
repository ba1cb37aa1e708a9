//! Axum extractor for the `{id}` segment of sprint routes

use crate::service::sprint_error::INVALID_SPRINT_ID;
use crate::{ApiError, SprintError};

use gp_core::parse_sprint_id;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A validated sprint id taken from the request path.
///
/// Any segment axum cannot hand over as a string (for example one that
/// percent-decodes to invalid UTF-8) is rejected like any other malformed
/// id, so the client always gets the JSON error body.
pub struct SprintId(pub i64);

impl<S> FromRequestParts<S> for SprintId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    log::debug!("Rejected sprint id segment: {}", rejection.body_text());
                    SprintError::validation(INVALID_SPRINT_ID)
                })?;

            let id = parse_sprint_id(&raw).map_err(SprintError::from)?;

            Ok(SprintId(id))
        }
    }
}
