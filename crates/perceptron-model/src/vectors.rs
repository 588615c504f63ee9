// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size vector types for the switch panel and the weight knobs
//!
//! Raw data (JSON arrays, CLI values) enters through `TryFrom` and is checked
//! for length and value range. Once built, a vector always holds exactly
//! [`INPUT_COUNT`] elements.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult, VectorKind};
use crate::INPUT_COUNT;

/// Bias knob setting
pub type Bias = f64;

/// One switch on the input panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    /// +1
    Up,
    /// -1
    Down,
}

impl Switch {
    /// Signed value fed into the summing circuit
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Switch::Up => 1.0,
            Switch::Down => -1.0,
        }
    }

    /// Accepts exactly 1 or -1 (integral floats included)
    pub fn from_value(value: f64) -> Option<Self> {
        if value == 1.0 {
            Some(Switch::Up)
        } else if value == -1.0 {
            Some(Switch::Down)
        } else {
            None
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Switch::Up => Switch::Down,
            Switch::Down => Switch::Up,
        }
    }
}

impl From<Switch> for i8 {
    fn from(switch: Switch) -> Self {
        match switch {
            Switch::Up => 1,
            Switch::Down => -1,
        }
    }
}

/// Positions of all 16 switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<i8>")]
pub struct InputVector([Switch; INPUT_COUNT]);

impl InputVector {
    pub const fn new(switches: [Switch; INPUT_COUNT]) -> Self {
        Self(switches)
    }

    pub const fn all_up() -> Self {
        Self([Switch::Up; INPUT_COUNT])
    }

    pub const fn all_down() -> Self {
        Self([Switch::Down; INPUT_COUNT])
    }

    /// Build from raw numbers, rejecting wrong lengths and values other than ±1
    pub fn try_from_values(values: &[f64]) -> ValidationResult<Self> {
        if values.len() != INPUT_COUNT {
            return Err(ValidationError::wrong_length(
                VectorKind::Inputs,
                values.len(),
            ));
        }

        let mut switches = [Switch::Down; INPUT_COUNT];
        for (index, (slot, &value)) in switches.iter_mut().zip(values).enumerate() {
            *slot = Switch::from_value(value)
                .ok_or(ValidationError::InvalidSwitch { index, value })?;
        }
        Ok(Self(switches))
    }

    pub fn switches(&self) -> &[Switch; INPUT_COUNT] {
        &self.0
    }

    /// Signed values (+1.0 / -1.0) in panel order
    pub fn values(&self) -> [f64; INPUT_COUNT] {
        self.0.map(Switch::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = Switch> + '_ {
        self.0.iter().copied()
    }

    /// Flip one switch; out-of-range indices are ignored
    pub fn toggle(&mut self, index: usize) {
        if let Some(switch) = self.0.get_mut(index) {
            *switch = switch.toggled();
        }
    }
}

impl Index<usize> for InputVector {
    type Output = Switch;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Vec<f64>> for InputVector {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from_values(&values)
    }
}

impl From<InputVector> for Vec<i8> {
    fn from(inputs: InputVector) -> Self {
        inputs.0.iter().map(|&s| i8::from(s)).collect()
    }
}

/// Settings of all 16 weight knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector([f64; INPUT_COUNT]);

impl WeightVector {
    /// Wrap a full knob array; every value must be finite
    pub fn new(weights: [f64; INPUT_COUNT]) -> ValidationResult<Self> {
        if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
            return Err(ValidationError::NonFiniteWeight { index, value });
        }
        Ok(Self(weights))
    }

    /// Caller guarantees every value is finite
    pub(crate) const fn from_finite(weights: [f64; INPUT_COUNT]) -> Self {
        Self(weights)
    }

    pub const fn zeros() -> Self {
        Self([0.0; INPUT_COUNT])
    }

    /// Every knob set to the same value
    pub fn splat(value: f64) -> ValidationResult<Self> {
        Self::new([value; INPUT_COUNT])
    }

    pub fn try_from_slice(values: &[f64]) -> ValidationResult<Self> {
        let weights: [f64; INPUT_COUNT] = values
            .try_into()
            .map_err(|_| ValidationError::wrong_length(VectorKind::Weights, values.len()))?;
        Self::new(weights)
    }

    pub fn as_array(&self) -> &[f64; INPUT_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Index<usize> for WeightVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from_slice(&values)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.to_vec()
    }
}

/// Reject NaN and infinities for the bias knob
pub fn validate_bias(bias: f64) -> ValidationResult<Bias> {
    if bias.is_finite() {
        Ok(bias)
    } else {
        Err(ValidationError::NonFiniteBias(bias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_from_value() {
        assert_eq!(Switch::from_value(1.0), Some(Switch::Up));
        assert_eq!(Switch::from_value(-1.0), Some(Switch::Down));
        assert_eq!(Switch::from_value(0.0), None);
        assert_eq!(Switch::from_value(0.5), None);
        assert_eq!(Switch::from_value(2.0), None);
    }

    #[test]
    fn test_inputs_wrong_length() {
        let short = vec![1.0; 15];
        let long = vec![1.0; 17];

        assert_eq!(
            InputVector::try_from(short),
            Err(ValidationError::wrong_length(VectorKind::Inputs, 15))
        );
        assert_eq!(
            InputVector::try_from(long),
            Err(ValidationError::wrong_length(VectorKind::Inputs, 17))
        );
    }

    #[test]
    fn test_inputs_reject_non_switch_value() {
        let mut values = vec![1.0; 16];
        values[7] = 0.0;

        let err = InputVector::try_from(values).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSwitch { index: 7, value: 0.0 });
    }

    #[test]
    fn test_inputs_toggle() {
        let mut inputs = InputVector::all_down();
        inputs.toggle(0);
        inputs.toggle(99);

        assert_eq!(inputs[0], Switch::Up);
        assert_eq!(inputs.iter().filter(|s| *s == Switch::Down).count(), 15);
    }

    #[test]
    fn test_weights_wrong_length() {
        let err = WeightVector::try_from_slice(&[0.5; 3]).unwrap_err();
        assert_eq!(err, ValidationError::wrong_length(VectorKind::Weights, 3));
    }

    #[test]
    fn test_weights_reject_nan() {
        let mut values = [0.0; 16];
        values[4] = f64::NAN;

        match WeightVector::new(values) {
            Err(ValidationError::NonFiniteWeight { index, .. }) => assert_eq!(index, 4),
            other => panic!("expected NonFiniteWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_weights_default_is_zero() {
        assert_eq!(WeightVector::default().as_slice(), &[0.0; 16]);
    }

    #[test]
    fn test_json_shape() {
        let inputs = InputVector::all_up();
        let json = serde_json::to_value(inputs).unwrap();
        assert_eq!(json, serde_json::json!(vec![1; 16]));

        let parsed: InputVector = serde_json::from_str("[1,1,1,1,-1,-1,-1,-1,1,1,1,1,-1,-1,-1,-1]").unwrap();
        assert_eq!(parsed[4], Switch::Down);

        let bad: Result<WeightVector, _> = serde_json::from_str("[1.0, 2.0]");
        assert!(bad.unwrap_err().to_string().contains("weights must contain exactly 16 values"));
    }

    #[test]
    fn test_validate_bias() {
        assert_eq!(validate_bias(-2.0), Ok(-2.0));
        assert!(validate_bias(f64::INFINITY).is_err());
    }
}
