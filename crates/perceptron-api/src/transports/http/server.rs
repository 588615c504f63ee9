// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// Routing, middleware and shared state for the REST API.

use axum::{
    body::{Body, Bytes},
    extract::DefaultBodyLimit,
    http::{header, Request, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use perceptron_config::{FrontendConfig, PerceptronConfig};
use perceptron_services::PerceptronService;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::common::ApiError;
use crate::endpoints::{frontend, perceptron, system};
use crate::middleware::create_cors_layer;
use crate::openapi::get_openapi_json;

/// Responses larger than this are not logged
const MAX_LOGGED_BODY_BYTES: usize = 10_000;

/// Largest request body accepted, and buffered for logging
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub perceptron_service: Arc<dyn PerceptronService + Send + Sync>,
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(perceptron_service: Arc<dyn PerceptronService + Send + Sync>) -> Self {
        Self {
            perceptron_service,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState, config: &PerceptronConfig) -> Router {
    let mut router = Router::new()
        // OpenAPI spec endpoint
        .route("/api-docs/openapi.json", get(openapi_spec))
        .merge(create_api_router());

    if config.frontend.enabled {
        router = mount_frontend(router, &config.frontend);
    }

    router
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(middleware::from_fn(log_request_response_bodies))
        .layer(create_cors_layer(&config.cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::span!(
                        target: "perceptron-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "perceptron-api", "Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                    tracing::debug!(
                        target: "perceptron-api",
                        "Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                    span.record("status", response.status().as_u16());
                    span.record("latency_ms", latency.as_millis() as u64);
                })
                .on_failure(|_error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "perceptron-api", "Request failed, latency={:?}", latency);
                }),
        )
}

/// All `/api/*` routes
fn create_api_router() -> Router<ApiState> {
    Router::new()
        .route("/api", get(system::api_info))
        .route("/api/health", get(system::health))
        .route("/api/state", get(perceptron::get_state))
        .route("/api/calculate", post(perceptron::calculate))
        .route("/api/weights", post(perceptron::update_weights))
        .route("/api/bias", post(perceptron::update_bias))
        .route("/api/reset", post(perceptron::reset))
}

/// `/` serves the built `index.html`; `/assets` serves the bundle's files
fn mount_frontend(router: Router<ApiState>, config: &FrontendConfig) -> Router<ApiState> {
    let index_file = config.index_file();
    tracing::info!(
        target: "perceptron-api",
        "Serving front end from {}",
        config.static_dir.display()
    );

    router
        .route(
            "/",
            get(move || {
                let index_file = index_file.clone();
                async move { frontend::serve_index(&index_file).await }
            }),
        )
        .nest_service("/assets", ServeDir::new(config.assets_dir()))
}

async fn openapi_spec() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], get_openapi_json())
}

async fn not_found(uri: Uri) -> ApiError {
    tracing::warn!(target: "perceptron-api", "Unmatched request - 404 Not Found: {}", uri);
    ApiError::not_found(uri.path())
}

/// Middleware to log request and response bodies at DEBUG
///
/// Bodies are only buffered when DEBUG is enabled for `perceptron-api`, and
/// request bodies never beyond [`MAX_REQUEST_BODY_BYTES`].
async fn log_request_response_bodies(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if !tracing::enabled!(target: "perceptron-api", tracing::Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();

    // Only POST bodies carry data on this API
    let body_bytes = if parts.method == axum::http::Method::POST {
        let bytes = buffer_request_body(body).await?;
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if !body_str.is_empty() {
                tracing::debug!(target: "perceptron-api", "Request body: {}", body_str);
            }
        }
        bytes
    } else {
        Bytes::new()
    };

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .to_bytes();

    if bytes.len() < MAX_LOGGED_BODY_BYTES {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if body_str.starts_with('{') {
                tracing::debug!(target: "perceptron-api", "Response body: {}", body_str);
            }
        }
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

async fn buffer_request_body(body: Body) -> Result<Bytes, StatusCode> {
    match Limited::new(body, MAX_REQUEST_BODY_BYTES).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => {
            tracing::warn!(
                target: "perceptron-api",
                "Request body over {} bytes rejected",
                MAX_REQUEST_BODY_BYTES
            );
            Err(StatusCode::PAYLOAD_TOO_LARGE)
        }
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_buffer_request_body_within_limit() {
        let bytes = buffer_request_body(Body::from("{\"bias\": 1.0}")).await.unwrap();
        assert_eq!(&bytes[..], b"{\"bias\": 1.0}");
    }

    #[tokio::test]
    async fn test_buffer_request_body_over_limit() {
        let oversized = vec![b' '; MAX_REQUEST_BODY_BYTES + 1];
        let err = buffer_request_body(Body::from(oversized)).await.unwrap_err();
        assert_eq!(err, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
