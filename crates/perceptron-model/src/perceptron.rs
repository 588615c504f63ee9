// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The summing circuit
//!
//! Pure functions for computing the machine output, plus a small
//! [`Perceptron`] value that owns one set of knob settings.

use crate::error::{ValidationError, ValidationResult, VectorKind};
use crate::vectors::{validate_bias, Bias, InputVector, WeightVector};
use crate::INPUT_COUNT;

/// Calculate the machine output
///
/// `output = Σ(inputs[i] × weights[i]) + bias`
///
/// # Example
/// ```
/// use perceptron_model::{calculate, InputVector, WeightVector};
///
/// let weights = WeightVector::splat(10.0).unwrap();
/// assert_eq!(calculate(&InputVector::all_down(), &weights, 0.0), -160.0);
/// ```
#[inline]
pub fn calculate(inputs: &InputVector, weights: &WeightVector, bias: Bias) -> f64 {
    inputs
        .iter()
        .zip(weights.as_array())
        .map(|(switch, weight)| switch.value() * weight)
        .sum::<f64>()
        + bias
}

/// Reject a sum that left the range of `f64`
///
/// Finite weights can still overflow once 16 of them are added up.
pub fn checked_output(output: f64) -> ValidationResult<f64> {
    if output.is_finite() {
        Ok(output)
    } else {
        Err(ValidationError::NonFiniteOutput(output))
    }
}

/// Calculate from unvalidated slices
///
/// Inputs are checked first, then weights, then the bias. Nothing is summed
/// unless every check passes, and an overflowing sum is an error.
pub fn calculate_raw(inputs: &[f64], weights: &[f64], bias: f64) -> ValidationResult<f64> {
    if inputs.len() != INPUT_COUNT {
        return Err(ValidationError::wrong_length(VectorKind::Inputs, inputs.len()));
    }
    if weights.len() != INPUT_COUNT {
        return Err(ValidationError::wrong_length(VectorKind::Weights, weights.len()));
    }

    let inputs = InputVector::try_from_values(inputs)?;
    let weights = WeightVector::try_from_slice(weights)?;
    let bias = validate_bias(bias)?;

    checked_output(calculate(&inputs, &weights, bias))
}

/// One set of knob settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perceptron {
    weights: WeightVector,
    bias: Bias,
}

impl Perceptron {
    pub fn new(weights: WeightVector, bias: Bias) -> ValidationResult<Self> {
        Ok(Self {
            weights,
            bias: validate_bias(bias)?,
        })
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn bias(&self) -> Bias {
        self.bias
    }

    /// Replaces all 16 weights at once
    pub fn set_weights(&mut self, weights: WeightVector) {
        self.weights = weights;
    }

    pub fn set_bias(&mut self, bias: Bias) -> ValidationResult<()> {
        self.bias = validate_bias(bias)?;
        Ok(())
    }

    /// Back to all-zero weights and zero bias
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn calculate_output(&self, inputs: &InputVector) -> f64 {
        calculate(inputs, &self.weights, self.bias)
    }

    /// Like [`Perceptron::calculate_output`], but an overflow is an error
    pub fn try_calculate_output(&self, inputs: &InputVector) -> ValidationResult<f64> {
        checked_output(self.calculate_output(inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn ten_weights() -> WeightVector {
        WeightVector::splat(10.0).unwrap()
    }

    #[test]
    fn test_all_up_ten_weights() {
        assert_eq!(calculate(&InputVector::all_up(), &ten_weights(), 0.0), 160.0);
    }

    #[test]
    fn test_all_down_ten_weights() {
        assert_eq!(calculate(&InputVector::all_down(), &ten_weights(), 0.0), -160.0);
    }

    #[test]
    fn test_bias_is_added() {
        assert_eq!(calculate(&InputVector::all_up(), &WeightVector::zeros(), 3.5), 3.5);
    }

    #[test]
    fn test_raw_rejects_bad_input_lengths() {
        let weights = [10.0; 16];

        for len in [0, 15, 17] {
            let inputs = vec![1.0; len];
            let err = calculate_raw(&inputs, &weights, 0.0).unwrap_err();
            assert_eq!(err, ValidationError::wrong_length(VectorKind::Inputs, len));
        }
    }

    #[test]
    fn test_raw_rejects_bad_weight_length() {
        let err = calculate_raw(&[1.0; 16], &[10.0; 17], 0.0).unwrap_err();
        assert_eq!(err, ValidationError::wrong_length(VectorKind::Weights, 17));
    }

    #[test]
    fn test_raw_checks_inputs_before_weights() {
        let err = calculate_raw(&[1.0; 15], &[10.0; 3], 0.0).unwrap_err();
        assert_eq!(err, ValidationError::wrong_length(VectorKind::Inputs, 15));
    }

    #[test]
    fn test_raw_matches_typed() {
        let raw = calculate_raw(&[1.0; 16], &[10.0; 16], 0.0).unwrap();
        assert_eq!(raw, 160.0);
    }

    #[test]
    fn test_raw_rejects_overflowing_sum() {
        let err = calculate_raw(&[1.0; 16], &[1e308; 16], 0.0).unwrap_err();
        assert_eq!(err, ValidationError::NonFiniteOutput(f64::INFINITY));

        let err = calculate_raw(&[-1.0; 16], &[1e308; 16], 0.0).unwrap_err();
        assert_eq!(err, ValidationError::NonFiniteOutput(f64::NEG_INFINITY));
    }

    #[test]
    fn test_try_calculate_output() {
        let huge = Perceptron::new(WeightVector::splat(f64::MAX).unwrap(), 0.0).unwrap();
        assert!(huge.try_calculate_output(&InputVector::all_up()).is_err());

        let perceptron = Perceptron::new(ten_weights(), 1.0).unwrap();
        assert_eq!(perceptron.try_calculate_output(&InputVector::all_up()), Ok(161.0));
    }

    #[test]
    fn test_t_pattern_output() {
        let perceptron = Perceptron::new(patterns::sample_weights(), patterns::SAMPLE_BIAS).unwrap();
        let output = perceptron.calculate_output(&patterns::T_PATTERN);
        assert!((output - 2.4).abs() < 1e-9, "got {}", output);
    }

    #[test]
    fn test_sample_weights_extremes() {
        let perceptron = Perceptron::new(patterns::sample_weights(), patterns::SAMPLE_BIAS).unwrap();
        assert!((perceptron.calculate_output(&InputVector::all_up()) - 5.6).abs() < 1e-9);
        assert!((perceptron.calculate_output(&InputVector::all_down()) + 9.6).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut perceptron = Perceptron::new(ten_weights(), -4.0).unwrap();
        perceptron.reset();

        assert_eq!(perceptron.weights(), &WeightVector::zeros());
        assert_eq!(perceptron.bias(), 0.0);
    }

    #[test]
    fn test_set_bias_rejects_nan() {
        let mut perceptron = Perceptron::default();
        assert!(perceptron.set_bias(f64::NAN).is_err());
        assert_eq!(perceptron.bias(), 0.0);
    }
}
