// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Server wiring: configuration in, ready-to-serve router out

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use perceptron_api::{create_http_server, ApiState};
use perceptron_config::{InitialStateConfig, LoggingConfig, PerceptronConfig};
use perceptron_model::{Perceptron, WeightVector};
use perceptron_observability::{LogFormat, LoggingOptions};
use perceptron_services::PerceptronServiceImpl;

/// Machine state at startup, from `[perceptron]`
pub fn initial_perceptron(config: &InitialStateConfig) -> Result<Perceptron> {
    let weights = match &config.initial_weights {
        Some(values) => {
            WeightVector::try_from_slice(values).context("Invalid [perceptron] initial_weights")?
        }
        None => WeightVector::zeros(),
    };
    Perceptron::new(weights, config.initial_bias).context("Invalid [perceptron] initial_bias")
}

/// Logging options from `[logging]`
pub fn logging_options(config: &LoggingConfig) -> LoggingOptions {
    LoggingOptions {
        level: config.level.clone(),
        format: if config.json {
            LogFormat::Json
        } else {
            LogFormat::Text
        },
        log_dir: config.log_dir.clone(),
        ..LoggingOptions::default()
    }
}

/// Build the full HTTP application for a validated configuration
pub fn build_router(config: &PerceptronConfig) -> Result<Router> {
    let perceptron = initial_perceptron(&config.perceptron)?;
    let service = Arc::new(PerceptronServiceImpl::new_with(perceptron));
    Ok(create_http_server(ApiState::new(service), config))
}
