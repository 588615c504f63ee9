// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// CORS middleware for HTTP API

use axum::http::HeaderValue;
use perceptron_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

/// Create the CORS layer from `[cors]` configuration
///
/// Listed origins get credentials with any method and header (mirrored, since
/// wildcards cannot be combined with credentials). `allow_any_origin` opens
/// the API to every origin without credentials.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_any_origin {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_credentials(false);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(target: "perceptron-api", "Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
