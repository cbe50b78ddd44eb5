//! Tests for the JSON bodies produced by the panic and timeout middleware.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use todo_api::router::{handle_panic, json_timeout_body};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn boom() -> &'static str {
    panic!("boom")
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

// ---------------------------------------------------------------------------
// Test: a handler panic becomes a sanitized JSON 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn panic_returns_json_500() {
    let app = Router::new()
        .route("/boom", get(boom))
        .layer(CatchPanicLayer::custom(handle_panic));

    let (status, bytes) = call(app, "/boom").await;
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["detail"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: a timed-out request gets a JSON 408
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_returns_json_408() {
    let app = Router::new()
        .route("/slow", get(slow))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(20),
        ))
        .layer(map_response(json_timeout_body));

    let (status, bytes) = call(app, "/slow").await;
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["code"], "REQUEST_TIMEOUT");
    assert_eq!(json["detail"], "Request timed out");
}

// ---------------------------------------------------------------------------
// Test: other responses pass through the timeout rewrite untouched
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_rewrite_leaves_other_responses_alone() {
    let original: Response = (StatusCode::CREATED, "created").into_response();

    let response = json_timeout_body(original).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"created");
}
