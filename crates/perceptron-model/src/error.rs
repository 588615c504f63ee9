// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Validation errors raised when building perceptron vectors from raw data

use std::fmt;
use thiserror::Error;

/// Which vector a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Inputs,
    Weights,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Inputs => write!(f, "inputs"),
            VectorKind::Weights => write!(f, "weights"),
        }
    }
}

/// The single error kind of the model: malformed input data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{vector} must contain exactly {expected} values, got {actual}")]
    WrongLength {
        vector: VectorKind,
        expected: usize,
        actual: usize,
    },

    #[error("inputs[{index}] must be either 1 or -1, got {value}")]
    InvalidSwitch { index: usize, value: f64 },

    #[error("weights[{index}] must be a finite number, got {value}")]
    NonFiniteWeight { index: usize, value: f64 },

    #[error("bias must be a finite number, got {0}")]
    NonFiniteBias(f64),

    #[error("output overflowed to {0}; weights or bias are too large")]
    NonFiniteOutput(f64),
}

impl ValidationError {
    pub fn wrong_length(vector: VectorKind, actual: usize) -> Self {
        ValidationError::WrongLength {
            vector,
            expected: crate::INPUT_COUNT,
            actual,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
