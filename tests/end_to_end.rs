// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file -> router -> HTTP round trip, as the server binary wires it

use axum::body::Body;
use axum::http::{Request, StatusCode};
use perceptron::app::build_router;
use perceptron_config::{load_config, validate_config};
use serde_json::{json, Value};
use std::io::Write;
use tower::ServiceExt;

const CONFIG: &str = r#"
[api]
host = "127.0.0.1"
port = 8123

[frontend]
enabled = false

[perceptron]
initial_weights = [0.5, 0.5, 0.5, 0.5, 0.2, 1.0, 1.0, 0.2, 0.2, 1.0, 1.0, 0.2, 0.2, 0.2, 0.2, 0.2]
initial_bias = -2.0
"#;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

async fn post(app: axum::Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(path)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_configured_initial_weights_drive_calculation() {
    let file = write_config(CONFIG);
    let config = load_config(Some(file.path()), None).unwrap();
    validate_config(&config).unwrap();

    // Weights come from the file; the request carries the bias
    let app = build_router(&config).unwrap();
    let (status, body) = post(
        app,
        "/api/calculate",
        json!({
            "inputs": [1, 1, 1, 1, -1, 1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1],
            "bias": -2.0,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let output = body["output"].as_f64().unwrap();
    assert_eq!(format!("{:.2}", output), "2.40");
}

#[tokio::test]
async fn test_disabled_frontend_leaves_root_unrouted() {
    let file = write_config(CONFIG);
    let config = load_config(Some(file.path()), None).unwrap();
    let app = build_router(&config).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_invalid_initial_weights_fail_validation() {
    let file = write_config("[perceptron]\ninitial_weights = [1.0, 2.0]\n");
    let config = load_config(Some(file.path()), None).unwrap();
    assert!(validate_config(&config).is_err());
    assert!(build_router(&config).is_err());
}
