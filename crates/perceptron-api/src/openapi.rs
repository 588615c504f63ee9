// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// OpenAPI documentation generation
//
// The OpenAPI 3.0 document is derived at compile time with utoipa, so it
// stays in sync with the handlers.

use utoipa::OpenApi;

use crate::{
    common::{ApiError, ApiErrorCode},
    v1::{
        ApiInfoResponse, BiasUpdateRequest, BiasUpdateResponse, CalculateRequest,
        CalculateResponse, HealthResponse, ResetResponse, StateResponse, WeightsUpdateRequest,
        WeightsUpdateResponse,
    },
};

/// OpenAPI documentation for the Perceptron REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Perceptron API",
        description = "API for simulating a physical perceptron machine",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::endpoints::system::api_info,
        crate::endpoints::system::health,
        crate::endpoints::perceptron::get_state,
        crate::endpoints::perceptron::calculate,
        crate::endpoints::perceptron::update_weights,
        crate::endpoints::perceptron::update_bias,
        crate::endpoints::perceptron::reset,
    ),
    components(
        schemas(
            ApiInfoResponse,
            HealthResponse,
            StateResponse,
            CalculateRequest,
            CalculateResponse,
            WeightsUpdateRequest,
            WeightsUpdateResponse,
            BiasUpdateRequest,
            BiasUpdateResponse,
            ResetResponse,
            ApiError,
            ApiErrorCode,
        )
    ),
    tags(
        (name = "perceptron", description = "Weights, bias and output calculation"),
        (name = "system", description = "API information and health"),
    )
)]
pub struct ApiDoc;

/// Pretty-printed OpenAPI document
pub fn get_openapi_json() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .unwrap_or_else(|_| "{}".to_string())
}
