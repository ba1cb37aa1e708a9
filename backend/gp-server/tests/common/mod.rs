#![allow(dead_code)]

//! Test infrastructure for gp-server API tests

use gp_config::MissingRowPolicy;
use gp_db::{DatabaseLocation, SprintRepository};
use gp_github::GithubClient;
use gp_server::{AppState, SprintService};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = gp_db::connect(&DatabaseLocation::InMemory, 1)
        .await
        .expect("Failed to create test database");

    gp_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState over `pool` with the given policy and no GitHub relay
pub fn create_app_state(pool: SqlitePool, missing_row: MissingRowPolicy) -> AppState {
    AppState {
        sprints: SprintService::new(Arc::new(SprintRepository::new(pool)), missing_row),
        github: None,
    }
}

/// Create AppState for testing (default policy, relay disabled)
pub async fn create_test_app_state() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;
    (
        create_app_state(pool.clone(), MissingRowPolicy::Ignore),
        pool,
    )
}

/// AppState whose relay talks to `github_base_url`
pub async fn create_test_app_state_with_github(github_base_url: &str) -> AppState {
    let pool = create_test_pool().await;
    let mut state = create_app_state(pool, MissingRowPolicy::Ignore);
    state.github = Some(
        GithubClient::new(github_base_url, "goplan-test", Duration::from_secs(5))
            .expect("Failed to build GitHub client"),
    );
    state
}

/// Insert a sprint row directly, returning its id
pub async fn create_test_sprint(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO sprints (name, start_date, end_date) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind("2018-01-01")
    .bind("2018-02-01")
    .fetch_one(pool)
    .await
    .expect("Failed to create test sprint")
}

/// Build a request with an optional JSON body
pub fn json_request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Status and parsed JSON body of a response
pub async fn read_json(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
