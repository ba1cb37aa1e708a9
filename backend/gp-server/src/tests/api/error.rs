use crate::{ApiError, SprintError};

use gp_core::{CoreError, Sprint, parse_sprint_id};
use gp_db::DbError;
use gp_github::{GithubError, IssueFilter};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_error_message() {
    let error = ApiError::NotFound {
        message: "Sprint not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"error": "Sprint not found"}));
}

#[tokio::test]
async fn test_each_variant_has_its_status() {
    let location = || ErrorLocation::from(Location::caller());
    let cases = [
        (
            ApiError::Validation {
                message: "v".into(),
                location: location(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::Unauthorized {
                message: "u".into(),
                location: location(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ApiError::Internal {
                message: "i".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::BadGateway {
                message: "b".into(),
                location: location(),
            },
            StatusCode::BAD_GATEWAY,
        ),
    ];

    for (error, expected) in cases {
        let (status, json) = body_json(error).await;
        assert_eq!(status, expected);
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn test_invalid_id_maps_to_fixed_message() {
    let core_error = parse_sprint_id("abc").unwrap_err();

    let (status, json) = body_json(SprintError::from(core_error).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid sprint ID");
}

#[tokio::test]
async fn test_undecodable_body_maps_to_fixed_message() {
    let core_error = Sprint::from_json_slice(b"{\"name\": 5}").unwrap_err();
    assert!(matches!(core_error, CoreError::Payload { .. }));

    let (status, json) = body_json(SprintError::from(core_error).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request payload");
}

#[tokio::test]
async fn test_storage_error_exposes_driver_message() {
    let sprint_error = SprintError::from(DbError::from(sqlx::Error::PoolClosed));

    let (status, json) = body_json(sprint_error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], sqlx::Error::PoolClosed.to_string());
}

#[tokio::test]
async fn test_missing_sprint_maps_to_not_found_message() {
    let (status, json) = body_json(SprintError::not_found(3).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Sprint not found");
}

#[tokio::test]
async fn test_github_errors_map_to_400_and_502() {
    let filter_error = IssueFilter::from_json_slice(b"{").unwrap_err();
    let (status, _) = body_json(filter_error.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = body_json(GithubError::upstream(404, "Not Found").into()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().unwrap().contains("404"));
    assert!(json["error"].as_str().unwrap().contains("Not Found"));
}
