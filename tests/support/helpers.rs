// tests/support/helpers.rs
use std::sync::Arc;

use articles_api::application::services::ApplicationServices;
use articles_api::domain::article::ArticleRepository;
use articles_api::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_services(repo: Arc<dyn ArticleRepository>) -> ApplicationServices {
    ApplicationServices::new(repo)
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> Router {
    let state = HttpState {
        services: Arc::new(build_services(repo)),
    };
    build_router(state)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_raw(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends `req` and returns the status with the raw body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    (status, ct, bytes.to_vec())
}

/// Sends `req` and returns the status with the body parsed as JSON.
pub async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, ct, bytes) = send(app, req).await;
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type {ct:?} for body {}",
        String::from_utf8_lossy(&bytes)
    );
    let json: Value = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

/// Returns the `message` of an error body, panicking when it is missing.
pub fn error_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| panic!("expected message field in {body}"))
}
