use crate::SprintId;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
};

#[tokio::test]
async fn test_extractor_without_matched_route_is_invalid_sprint_id() {
    // No router ran, so there are no path params to read
    let request = Request::builder()
        .uri("/sprint/1")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = SprintId::from_request_parts(&mut parts, &()).await;

    let error = match result {
        Err(error) => error,
        Ok(SprintId(id)) => panic!("extracted id {} without a route", id),
    };
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("Invalid sprint ID"));
}
