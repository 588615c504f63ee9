// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Perceptron service implementation.

Holds the process-lifetime machine state behind a read/write lock.
*/

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use perceptron_model::{validate_bias, InputVector, Perceptron, WeightVector};
use tracing::{debug, info, warn};

use crate::traits::PerceptronService;
use crate::types::{CalculateParams, CalculationResult, PerceptronState, ServiceError, ServiceResult};

/// Default implementation of PerceptronService
///
/// Every update replaces whole values under the write guard; reads copy the
/// state out under the read guard.
pub struct PerceptronServiceImpl {
    perceptron: Arc<RwLock<Perceptron>>,
}

impl PerceptronServiceImpl {
    /// Start from zero weights and zero bias
    pub fn new() -> Self {
        Self::new_with(Perceptron::default())
    }

    /// Start from the given settings (e.g. from configuration)
    pub fn new_with(perceptron: Perceptron) -> Self {
        Self {
            perceptron: Arc::new(RwLock::new(perceptron)),
        }
    }
}

impl Default for PerceptronServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

fn rejected(operation: &str, err: impl Into<ServiceError>) -> ServiceError {
    let err = err.into();
    warn!(target: "perceptron-services", "Rejected {}: {}", operation, err);
    err
}

#[async_trait]
impl PerceptronService for PerceptronServiceImpl {
    async fn get_state(&self) -> ServiceResult<PerceptronState> {
        debug!(target: "perceptron-services", "Reading perceptron state");
        Ok(PerceptronState::from(&*self.perceptron.read()))
    }

    async fn set_weights(&self, weights: Vec<f64>) -> ServiceResult<PerceptronState> {
        let weights = WeightVector::try_from_slice(&weights).map_err(|e| rejected("weights update", e))?;

        let mut perceptron = self.perceptron.write();
        perceptron.set_weights(weights);
        info!(target: "perceptron-services", "Weights updated: {:?}", weights.as_slice());

        Ok(PerceptronState::from(&*perceptron))
    }

    async fn set_bias(&self, bias: f64) -> ServiceResult<PerceptronState> {
        let mut perceptron = self.perceptron.write();
        perceptron
            .set_bias(bias)
            .map_err(|e| rejected("bias update", e))?;
        info!(target: "perceptron-services", "Bias updated: {}", bias);

        Ok(PerceptronState::from(&*perceptron))
    }

    async fn reset(&self) -> ServiceResult<PerceptronState> {
        let mut perceptron = self.perceptron.write();
        perceptron.reset();
        info!(target: "perceptron-services", "Perceptron reset to default state");

        Ok(PerceptronState::from(&*perceptron))
    }

    async fn calculate(&self, params: CalculateParams) -> ServiceResult<CalculationResult> {
        // Validate everything before touching the stored state
        let inputs =
            InputVector::try_from_values(&params.inputs).map_err(|e| rejected("calculation", e))?;
        let weights = params
            .weights
            .as_deref()
            .map(WeightVector::try_from_slice)
            .transpose()
            .map_err(|e| rejected("calculation", e))?;
        let bias = validate_bias(params.bias).map_err(|e| rejected("calculation", e))?;

        let mut perceptron = self.perceptron.write();

        // Work on a copy; the stored state only changes if the output is finite
        let mut candidate = *perceptron;
        if let Some(weights) = weights {
            candidate.set_weights(weights);
        }
        candidate.set_bias(bias)?;

        let output = candidate
            .try_calculate_output(&inputs)
            .map_err(|e| rejected("calculation", e))?;

        *perceptron = candidate;
        info!(
            target: "perceptron-services",
            "Settings updated by calculation (weights {}, bias {})",
            if params.weights.is_some() { "replaced" } else { "kept" },
            bias
        );
        debug!(target: "perceptron-services", "Calculated output {}", output);

        Ok(CalculationResult {
            output,
            inputs,
            weights: *candidate.weights(),
            bias: candidate.bias(),
        })
    }
}
