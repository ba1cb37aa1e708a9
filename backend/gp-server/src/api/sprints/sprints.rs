//! Sprint REST API handlers

use crate::{ApiResult, AppState, DeleteResponse, SprintError, SprintId, SprintQuery};

use gp_core::Sprint;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /sprints?start=&count=
///
/// List one page of sprints in creation order
pub async fn list_sprints(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Sprint>>> {
    let page = SprintQuery(pairs).page();
    let sprints = state.sprints.list(page).await?;

    Ok(Json(sprints))
}

/// POST /sprint
///
/// Create a sprint; the generated id is returned with the submitted fields
pub async fn create_sprint(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Sprint>)> {
    let sprint = Sprint::from_json_slice(&body).map_err(SprintError::from)?;

    let created = state.sprints.create(sprint).await?;

    log::info!(
        "Created sprint {} ({}) via REST API",
        created.id,
        created.name
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /sprint/{id}
pub async fn get_sprint(
    State(state): State<AppState>,
    SprintId(id): SprintId,
) -> ApiResult<Json<Sprint>> {
    let sprint = state.sprints.get(id).await?;

    Ok(Json(sprint))
}

/// PUT /sprint/{id}
///
/// Overwrite every field; the path id wins over any id in the body
pub async fn update_sprint(
    State(state): State<AppState>,
    SprintId(id): SprintId,
    body: Bytes,
) -> ApiResult<Json<Sprint>> {
    let sprint = Sprint::from_json_slice(&body).map_err(SprintError::from)?;

    let updated = state.sprints.update(id, sprint).await?;

    log::info!("Updated sprint {} via REST API", id);

    Ok(Json(updated))
}

/// DELETE /sprint/{id}
pub async fn delete_sprint(
    State(state): State<AppState>,
    SprintId(id): SprintId,
) -> ApiResult<Json<DeleteResponse>> {
    state.sprints.delete(id).await?;

    log::info!("Deleted sprint {} via REST API", id);

    Ok(Json(DeleteResponse::success()))
}
