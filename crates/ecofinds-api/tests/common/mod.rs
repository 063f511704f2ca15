//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ecofinds_api::routes;
use ecofinds_api::state::AppState;
use ecofinds_core::clock::Clock;
use ecofinds_test_support::{FixedClock, InMemoryDocumentStore, InstantOrderProcessor};

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 3, 1, 9, 30, 0).unwrap(),
    ))
}

/// Build the full app router over a fresh in-memory store, a fixed clock,
/// and an instant order processor. Uses the same route structure as
/// `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(InMemoryDocumentStore::new()))
}

/// Build the full app router over a caller-provided store, so tests can
/// inspect what was persisted.
pub fn build_test_app_with_store(store: Arc<InMemoryDocumentStore>) -> Router {
    let app_state = AppState::new(fixed_clock(), store, Arc::new(InstantOrderProcessor));

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/cart", routes::cart::router())
        .nest("/api/v1", routes::checkout::router())
        .with_state(app_state)
}

/// Send a request with a JSON body and return the response.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    dispatch(app, request).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, body).await
}

/// Send a bodyless request and return the response.
pub async fn send_empty(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    dispatch(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_empty(app, "GET", uri).await
}

async fn dispatch(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}
