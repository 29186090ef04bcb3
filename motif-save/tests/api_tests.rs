//! Integration tests for motif-save API endpoints
//!
//! Tests cover:
//! - Saving arbitrary JSON values and reading them back
//! - Two-space indented output replacing previous contents
//! - Structured failures for malformed bodies, unwritable paths and
//!   oversized bodies
//! - Health endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use motif_save::{build_router, AppState};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// Test helper: temp project root with `static/data` created
fn setup_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("static").join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    let motifs_path = data_dir.join("motifs.json");
    (dir, motifs_path)
}

fn setup_app(motifs_path: PathBuf) -> axum::Router {
    build_router(AppState::new(motifs_path, TEST_BODY_LIMIT))
}

fn save_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/save-motifs")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn post_value(motifs_path: &PathBuf, value: &Value) -> (StatusCode, Value) {
    let app = setup_app(motifs_path.clone());
    let response = app
        .oneshot(save_request(serde_json::to_vec(value).unwrap()))
        .await
        .unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

// =============================================================================
// Save Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_save_object_round_trips_through_file() {
    let (_dir, motifs_path) = setup_project();
    let motifs = json!({
        "motifs": [
            {"id": "m1", "notes": [60, 64, 67], "tempo": 120.5},
            {"id": "m2", "notes": [], "label": null}
        ]
    });

    let (status, body) = post_value(&motifs_path, &motifs).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&motifs_path).unwrap()).unwrap();
    assert_eq!(written, motifs);
}

#[tokio::test]
async fn test_any_json_value_is_accepted() {
    let (_dir, motifs_path) = setup_project();

    for value in [json!(null), json!(42), json!("just a string"), json!([1, "two", false])] {
        let (status, body) = post_value(&motifs_path, &value).await;
        assert_eq!(status, StatusCode::OK, "value {} should be accepted", value);
        assert_eq!(body["success"], true);

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&motifs_path).unwrap()).unwrap();
        assert_eq!(written, value);
    }
}

#[tokio::test]
async fn test_output_is_two_space_indented_and_replaces_previous() {
    let (_dir, motifs_path) = setup_project();
    std::fs::write(&motifs_path, "[\"stale\", \"content\", \"that is longer\"]").unwrap();

    let app = setup_app(motifs_path.clone());
    let response = app
        .oneshot(save_request(r#"{"b":[1],"a":{}}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = std::fs::read_to_string(&motifs_path).unwrap();
    assert_eq!(text, "{\n  \"b\": [\n    1\n  ],\n  \"a\": {}\n}");
}

#[tokio::test]
async fn test_missing_content_type_still_saves() {
    let (_dir, motifs_path) = setup_project();
    let app = setup_app(motifs_path.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/save-motifs")
        .body(Body::from("[1,2,3]"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(std::fs::read_to_string(&motifs_path).unwrap(), "[\n  1,\n  2,\n  3\n]");
}

#[tokio::test]
async fn test_malformed_json_returns_structured_failure() {
    let (_dir, motifs_path) = setup_project();
    std::fs::write(&motifs_path, "{}").unwrap();
    let app = setup_app(motifs_path.clone());

    let response = app.oneshot(save_request("{\"motifs\": [")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());

    // Nothing written on parse failure
    assert_eq!(std::fs::read_to_string(&motifs_path).unwrap(), "{}");
}

#[tokio::test]
async fn test_missing_output_directory_returns_failure() {
    let dir = TempDir::new().unwrap();
    let motifs_path = dir.path().join("static").join("data").join("motifs.json");

    let (status, body) = post_value(&motifs_path, &json!({"a": 1})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(!motifs_path.exists());
}

#[tokio::test]
async fn test_output_path_that_is_a_directory_returns_failure() {
    let (_dir, motifs_path) = setup_project();
    std::fs::create_dir(&motifs_path).unwrap();

    let (status, body) = post_value(&motifs_path, &json!([])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Failed to write motifs"));
}

#[tokio::test]
async fn test_oversized_body_returns_structured_failure() {
    let (_dir, motifs_path) = setup_project();
    let app = build_router(AppState::new(motifs_path.clone(), 16));

    let response = app
        .oneshot(save_request(r#"{"motifs": ["well over sixteen bytes"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(!motifs_path.exists());
}

#[tokio::test]
async fn test_get_on_save_route_not_allowed() {
    let (_dir, motifs_path) = setup_project();
    let app = setup_app(motifs_path);

    let request = Request::builder()
        .method("GET")
        .uri("/api/save-motifs")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, motifs_path) = setup_project();
    let app = setup_app(motifs_path);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "motif-save");
    assert!(body["version"].is_string());
    assert_eq!(body["data_dir_present"], true);
}

#[tokio::test]
async fn test_health_degraded_when_data_dir_missing() {
    let dir = TempDir::new().unwrap();
    let motifs_path = dir.path().join("static").join("data").join("motifs.json");
    let app = setup_app(motifs_path.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["data_dir_present"], false);
    assert_eq!(body["motifs_path"], motifs_path.display().to_string());
}

#[tokio::test]
async fn test_build_info_endpoint() {
    let (_dir, motifs_path) = setup_project();
    let app = setup_app(motifs_path);

    let request = Request::builder()
        .method("GET")
        .uri("/build_info")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["git_hash"].is_string());
    assert!(body["built_at"].is_string());
    assert!(body["profile"].is_string());
}
