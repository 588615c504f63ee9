// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Perceptron API Endpoints - `/api/state`, `/api/calculate`, `/api/weights`,
//! `/api/bias`, `/api/reset`

use perceptron_services::CalculateParams;

use crate::common::{ApiJson, ApiResult, ApiState, Json, State};
use crate::v1::{
    BiasUpdateRequest, BiasUpdateResponse, CalculateRequest, CalculateResponse, ResetResponse,
    StateResponse, WeightsUpdateRequest, WeightsUpdateResponse,
};

/// Get the current weights and bias.
#[utoipa::path(
    get,
    path = "/api/state",
    responses(
        (status = 200, description = "Current perceptron state", body = StateResponse),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "perceptron"
)]
pub async fn get_state(State(state): State<ApiState>) -> ApiResult<Json<StateResponse>> {
    let current = state.perceptron_service.get_state().await?;
    Ok(Json(current.into()))
}

/// Calculate the output for 16 switch positions.
///
/// Weights in the body replace the stored ones (kept when omitted). The bias
/// is always stored and defaults to `0.0`.
#[utoipa::path(
    post,
    path = "/api/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Output calculated", body = CalculateResponse),
        (status = 422, description = "Invalid inputs, weights or bias, or an output too large to represent", body = ApiError)
    ),
    tag = "perceptron"
)]
pub async fn calculate(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<CalculateRequest>,
) -> ApiResult<Json<CalculateResponse>> {
    let result = state
        .perceptron_service
        .calculate(CalculateParams {
            inputs: request.inputs,
            weights: request.weights,
            bias: request.bias,
        })
        .await?;
    Ok(Json(result.into()))
}

/// Replace all 16 weights.
#[utoipa::path(
    post,
    path = "/api/weights",
    request_body = WeightsUpdateRequest,
    responses(
        (status = 200, description = "Weights updated", body = WeightsUpdateResponse),
        (status = 422, description = "Not exactly 16 numbers", body = ApiError)
    ),
    tag = "perceptron"
)]
pub async fn update_weights(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<WeightsUpdateRequest>,
) -> ApiResult<Json<WeightsUpdateResponse>> {
    let updated = state
        .perceptron_service
        .set_weights(request.weights)
        .await?;
    Ok(Json(WeightsUpdateResponse {
        message: "Weights updated successfully".to_string(),
        weights: updated.weights.to_vec(),
    }))
}

/// Replace the bias.
#[utoipa::path(
    post,
    path = "/api/bias",
    request_body = BiasUpdateRequest,
    responses(
        (status = 200, description = "Bias updated", body = BiasUpdateResponse),
        (status = 422, description = "Bias is not a number", body = ApiError)
    ),
    tag = "perceptron"
)]
pub async fn update_bias(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<BiasUpdateRequest>,
) -> ApiResult<Json<BiasUpdateResponse>> {
    let updated = state.perceptron_service.set_bias(request.bias).await?;
    Ok(Json(BiasUpdateResponse {
        message: "Bias updated successfully".to_string(),
        bias: updated.bias,
    }))
}

/// Reset to all-zero weights and zero bias.
#[utoipa::path(
    post,
    path = "/api/reset",
    responses(
        (status = 200, description = "Perceptron reset", body = ResetResponse)
    ),
    tag = "perceptron"
)]
pub async fn reset(State(state): State<ApiState>) -> ApiResult<Json<ResetResponse>> {
    let cleared = state.perceptron_service.reset().await?;
    Ok(Json(ResetResponse {
        message: "Perceptron reset to default state".to_string(),
        weights: cleared.weights.to_vec(),
        bias: cleared.bias,
    }))
}
