// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// API Version 1 - Data Transfer Objects
// Field names match what the bundled front end sends and reads.

use perceptron_services::{CalculationResult, PerceptronState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Body of `POST /api/calculate`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// 16 switch positions, each 1 (up) or -1 (down)
    #[schema(example = json!([1, 1, 1, 1, -1, 1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1]))]
    pub inputs: Vec<f64>,

    /// 16 weights to store before calculating; stored weights when omitted
    #[serde(default)]
    pub weights: Option<Vec<f64>>,

    /// Bias to store before calculating; `0.0` when omitted
    #[serde(default)]
    #[schema(example = -2.0)]
    pub bias: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    #[schema(example = 2.4)]
    pub output: f64,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub inputs: Vec<i8>,
}

impl From<CalculationResult> for CalculateResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            output: result.output,
            weights: result.weights.to_vec(),
            bias: result.bias,
            inputs: result.inputs.into(),
        }
    }
}

/// Current knob settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateResponse {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl From<PerceptronState> for StateResponse {
    fn from(state: PerceptronState) -> Self {
        Self {
            weights: state.weights.to_vec(),
            bias: state.bias,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightsUpdateRequest {
    pub weights: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightsUpdateResponse {
    #[schema(example = "Weights updated successfully")]
    pub message: String,
    pub weights: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BiasUpdateRequest {
    pub bias: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BiasUpdateResponse {
    #[schema(example = "Bias updated successfully")]
    pub message: String,
    pub bias: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetResponse {
    #[schema(example = "Perceptron reset to default state")]
    pub message: String,
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// `GET /api` payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoResponse {
    #[schema(example = "Perceptron API")]
    pub message: String,
    pub version: String,
    /// "METHOD /path" -> description
    pub endpoints: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Returned at `/` when no built front end is present
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
