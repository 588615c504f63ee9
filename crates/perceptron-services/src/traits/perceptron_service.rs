// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Perceptron service trait.

Stable interface over the shared machine state.
*/

use crate::types::*;
use async_trait::async_trait;

/// Perceptron service (transport-agnostic)
#[async_trait]
pub trait PerceptronService: Send + Sync {
    /// Current weights and bias
    async fn get_state(&self) -> ServiceResult<PerceptronState>;

    /// Replace all 16 weights
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - Not exactly 16 values, or a non-finite value
    ///
    async fn set_weights(&self, weights: Vec<f64>) -> ServiceResult<PerceptronState>;

    /// Replace the bias
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - Non-finite value
    ///
    async fn set_bias(&self, bias: f64) -> ServiceResult<PerceptronState>;

    /// Back to all-zero weights and zero bias
    async fn reset(&self) -> ServiceResult<PerceptronState>;

    /// Compute `Σ(input_i × weight_i) + bias`
    ///
    /// Provided weights replace the stored ones, omitted weights are kept.
    /// The bias is always stored. Nothing is stored if any parameter is
    /// invalid or the output overflows.
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - Wrong vector length, an input other
    ///   than 1 or -1, a non-finite number, or an output too large for `f64`
    ///
    async fn calculate(&self, params: CalculateParams) -> ServiceResult<CalculationResult>;
}
