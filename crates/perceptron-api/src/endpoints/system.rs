// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! System API Endpoints - `/api` and `/api/health`

use std::collections::BTreeMap;

use crate::common::{ApiState, Json, State};
use crate::v1::{ApiInfoResponse, HealthResponse};

/// Routes listed by `GET /api`
const ENDPOINTS: &[(&str, &str)] = &[
    ("POST /api/calculate", "Calculate perceptron output"),
    ("GET /api/state", "Get current perceptron state"),
    ("POST /api/weights", "Update weights"),
    ("POST /api/bias", "Update bias"),
    ("POST /api/reset", "Reset to default state"),
    ("GET /api/health", "Server health and uptime"),
];

/// API information: name, version and endpoint list.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "API information", body = ApiInfoResponse)
    ),
    tag = "system"
)]
pub async fn api_info() -> Json<ApiInfoResponse> {
    let endpoints: BTreeMap<String, String> = ENDPOINTS
        .iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect();

    Json(ApiInfoResponse {
        message: "Perceptron API".to_string(),
        version: crate::VERSION.to_string(),
        endpoints,
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}
