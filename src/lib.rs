// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Perceptron - a simulated perceptron machine
//!
//! Software version of a physical teaching machine: 16 switches in a 4x4
//! grid, a weight knob per switch, one bias knob, and a meter showing
//! `output = Σ(input_i × weight_i) + bias`.
//!
//! ## Crates
//! - [`model`]: vectors, validation and the weighted sum
//! - [`config`]: `perceptron_configuration.toml` loading
//! - [`observability`]: logging setup
//! - [`services`]: the shared machine state
//! - [`api`]: the axum REST API
//!
//! ## Binaries
//! - `perceptron-server`: serves the REST API (and a built front end)
//! - `perceptron-demo`: prints the fixed demonstration
//!
//! ```rust
//! use perceptron::model::{calculate, patterns};
//!
//! let output = calculate(&patterns::T_PATTERN, &patterns::sample_weights(), patterns::SAMPLE_BIAS);
//! assert_eq!(format!("{:.2}", output), "2.40");
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod demo;

pub use perceptron_api as api;
pub use perceptron_config as config;
pub use perceptron_model as model;
pub use perceptron_observability as observability;
pub use perceptron_services as services;

/// Commonly used types
pub mod prelude {
    pub use perceptron_model::{
        calculate, calculate_raw, Bias, InputVector, Perceptron, Switch, ValidationError,
        WeightVector, INPUT_COUNT,
    };
    pub use perceptron_services::{PerceptronService, PerceptronServiceImpl};
}
