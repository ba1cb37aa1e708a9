use crate::{
    AppState, create_sprint, delete_sprint, get_sprint, health, list_repository_issues,
    list_sprints, update_sprint,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Sprint resource
        .route("/sprints", get(list_sprints))
        .route("/sprint", post(create_sprint))
        .route(
            "/sprint/{id}",
            get(get_sprint).put(update_sprint).delete(delete_sprint),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check));

    // GitHub relay, only when enabled
    if state.github.is_some() {
        router = router.route("/metrics/{owner}/{repository}", get(list_repository_issues));
    }

    router
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
