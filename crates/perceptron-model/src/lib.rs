// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Perceptron Model
//!
//! Software rendition of a physical perceptron machine:
//! - **16 switches** in a 4x4 grid, each UP (+1) or DOWN (-1)
//! - **16 weight knobs**, one per switch
//! - **1 bias knob**
//! - A summing circuit: `output = Σ(input_i × weight_i) + bias`
//!
//! The vector types can only be built through length-checked constructors,
//! so every [`InputVector`] and [`WeightVector`] in the program holds exactly
//! [`INPUT_COUNT`] values.
//!
//! ```
//! use perceptron_model::{calculate, InputVector, WeightVector};
//!
//! let inputs = InputVector::all_up();
//! let weights = WeightVector::splat(10.0).unwrap();
//! assert_eq!(calculate(&inputs, &weights, 0.0), 160.0);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of switches (and weight knobs) on the machine
pub const INPUT_COUNT: usize = 16;

pub mod error;
pub mod patterns;
pub mod perceptron;
pub mod vectors;

pub use error::{ValidationError, ValidationResult, VectorKind};
pub use perceptron::{calculate, calculate_raw, checked_output, Perceptron};
pub use vectors::{validate_bias, Bias, InputVector, Switch, WeightVector};
