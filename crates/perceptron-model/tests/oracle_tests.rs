// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cross-check the summing circuit against an independent dot product

use perceptron_model::{
    calculate, calculate_raw, InputVector, ValidationError, VectorKind, WeightVector,
};
use proptest::prelude::*;

/// Straight-line dot product over raw numbers, no model types involved
fn oracle(inputs: &[i8], weights: &[f64], bias: f64) -> f64 {
    let mut total = 0.0;
    for i in 0..inputs.len() {
        total += f64::from(inputs[i]) * weights[i];
    }
    total + bias
}

fn switch_values() -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(prop_oneof![Just(1i8), Just(-1i8)], 16)
}

fn weight_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, 16)
}

proptest! {
    #[test]
    fn calculate_matches_oracle(
        inputs in switch_values(),
        weights in weight_values(),
        bias in -1000.0f64..1000.0,
    ) {
        let raw_inputs: Vec<f64> = inputs.iter().map(|&v| f64::from(v)).collect();
        let typed_inputs = InputVector::try_from(raw_inputs.clone()).unwrap();
        let typed_weights = WeightVector::try_from(weights.clone()).unwrap();

        let expected = oracle(&inputs, &weights, bias);
        let actual = calculate(&typed_inputs, &typed_weights, bias);
        let tolerance = 1e-9 * (1.0 + expected.abs());

        prop_assert!((actual - expected).abs() <= tolerance, "{} vs {}", actual, expected);

        let raw = calculate_raw(&raw_inputs, &weights, bias).unwrap();
        prop_assert!((raw - expected).abs() <= tolerance);
    }

    #[test]
    fn wrong_input_length_is_rejected(len in 0usize..40, weights in weight_values()) {
        prop_assume!(len != 16);
        let inputs = vec![1.0; len];

        let err = calculate_raw(&inputs, &weights, 0.0).unwrap_err();
        prop_assert_eq!(err, ValidationError::wrong_length(VectorKind::Inputs, len));
    }

    #[test]
    fn flipping_a_switch_moves_output_by_twice_the_weight(
        inputs in switch_values(),
        weights in weight_values(),
        index in 0usize..16,
    ) {
        let raw_inputs: Vec<f64> = inputs.iter().map(|&v| f64::from(v)).collect();
        let before = InputVector::try_from(raw_inputs).unwrap();
        let mut after = before;
        after.toggle(index);
        let weights = WeightVector::try_from(weights).unwrap();

        let delta = calculate(&after, &weights, 0.0) - calculate(&before, &weights, 0.0);
        let expected = 2.0 * after[index].value() * weights[index];

        prop_assert!((delta - expected).abs() <= 1e-6);
    }
}

#[test]
fn t_pattern_reference_output() {
    let inputs: [i8; 16] = [1, 1, 1, 1, -1, 1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1];
    let weights = [
        0.5, 0.5, 0.5, 0.5, 0.2, 1.0, 1.0, 0.2, 0.2, 1.0, 1.0, 0.2, 0.2, 0.2, 0.2, 0.2,
    ];
    let raw_inputs: Vec<f64> = inputs.iter().map(|&v| f64::from(v)).collect();

    let output = calculate_raw(&raw_inputs, &weights, -2.0).unwrap();

    assert!((output - oracle(&inputs, &weights, -2.0)).abs() < 1e-12);
    assert_eq!(format!("{:.2}", output), "2.40");
}
