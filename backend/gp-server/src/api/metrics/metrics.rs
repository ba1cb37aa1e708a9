//! GitHub issue relay handler

use crate::{ApiError, ApiResult, AppState};

use gp_github::IssueFilter;

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
};
use error_location::ErrorLocation;
use serde_json::Value;

/// Header carrying the caller's GitHub access token
pub const TOKEN_HEADER: &str = "token";

/// GET /metrics/{owner}/{repository}
///
/// Relay an issue listing to GitHub with the caller's token and return
/// GitHub's JSON as-is. The body is an optional [`IssueFilter`].
pub async fn list_repository_issues(
    State(state): State<AppState>,
    Path((owner, repository)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let client = state.github.as_ref().ok_or_else(|| ApiError::NotFound {
        message: "GitHub relay is disabled".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Missing token header".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let filter = IssueFilter::from_json_slice(&body)?;

    let issues = client
        .list_repository_issues(token, &owner, &repository, &filter)
        .await?;

    log::info!("Relayed issue list for {}/{}", owner, repository);

    Ok(Json(issues))
}
