// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Transport-agnostic Data Transfer Objects (DTOs).

Raw parameters come in as plain `Vec<f64>` so that validation happens in the
service; results go out with the validated model types.
*/

use perceptron_model::{Bias, InputVector, Perceptron, WeightVector};
use serde::{Deserialize, Serialize};

/// Current knob settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceptronState {
    pub weights: WeightVector,
    pub bias: Bias,
}

impl From<&Perceptron> for PerceptronState {
    fn from(perceptron: &Perceptron) -> Self {
        Self {
            weights: *perceptron.weights(),
            bias: perceptron.bias(),
        }
    }
}

/// Parameters for a calculation
///
/// `weights`, when present, replace the stored weights. `bias` is always
/// stored, so a caller that leaves it at the default sets it to `0.0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateParams {
    pub inputs: Vec<f64>,
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub bias: f64,
}

/// Outcome of a calculation, with the settings it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub output: f64,
    pub inputs: InputVector,
    pub weights: WeightVector,
    pub bias: Bias,
}
