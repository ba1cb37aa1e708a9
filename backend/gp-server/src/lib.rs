pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;


pub use api::{
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
    extractors::sprint_id::SprintId,
    metrics::metrics::{TOKEN_HEADER, list_repository_issues},
    sprints::{
        delete_response::DeleteResponse,
        sprint_query::SprintQuery,
        sprints::{create_sprint, delete_sprint, get_sprint, list_sprints, update_sprint},
    },
};
pub use app_state::AppState;
pub use service::{
    sprint_error::{Result as SprintResult, SprintError},
    sprint_service::SprintService,
};

pub use crate::routes::build_router;
