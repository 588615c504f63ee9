// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Collects every problem in one pass so the operator sees them all at once.

use crate::{ConfigError, ConfigResult, PerceptronConfig};
use perceptron_model::INPUT_COUNT;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidPortRange { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPortRange { port_name, port } => {
                write!(
                    f,
                    "Port {} = {} is outside valid range (1024-65535)",
                    port_name, port
                )
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Port range (1024-65535)
/// - Required fields
/// - Known log level
/// - Initial knob settings the machine can actually hold
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failure
pub fn validate_config(config: &PerceptronConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_port_ranges(config, &mut errors);
    validate_required_fields(config, &mut errors);
    validate_logging(config, &mut errors);
    validate_initial_state(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_port_ranges(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.api.port < 1024 {
        errors.push(ConfigValidationError::InvalidPortRange {
            port_name: "api.port".to_string(),
            port: config.api.port,
        });
    }
}

fn validate_required_fields(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.api.host.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "api.host".to_string(),
        });
    }

    if config.frontend.enabled && config.frontend.static_dir.as_os_str().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "frontend.static_dir".to_string(),
        });
    }

    if !config.cors.allow_any_origin && config.cors.allowed_origins.iter().any(|o| o.trim().is_empty()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "cors.allowed_origins".to_string(),
            reason: "must not contain empty origins".to_string(),
        });
    }
}

fn validate_logging(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }
}

fn validate_initial_state(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    if let Some(weights) = &config.perceptron.initial_weights {
        if weights.len() != INPUT_COUNT {
            errors.push(ConfigValidationError::InvalidValue {
                field: "perceptron.initial_weights".to_string(),
                reason: format!("must contain exactly {} values, got {}", INPUT_COUNT, weights.len()),
            });
        } else if weights.iter().any(|w| !w.is_finite()) {
            errors.push(ConfigValidationError::InvalidValue {
                field: "perceptron.initial_weights".to_string(),
                reason: "must be finite numbers".to_string(),
            });
        }
    }

    if !config.perceptron.initial_bias.is_finite() {
        errors.push(ConfigValidationError::InvalidValue {
            field: "perceptron.initial_bias".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PerceptronConfig::default();
        let result = validate_config(&config);
        if let Err(e) = &result {
            eprintln!("Validation error: {}", e);
        }
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_port_range() {
        let mut config = PerceptronConfig::default();
        config.api.port = 80;

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("api.port"));
                assert!(msg.contains("1024-65535"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_weights_length() {
        let mut config = PerceptronConfig::default();
        config.perceptron.initial_weights = Some(vec![0.5; 15]);

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("perceptron.initial_weights"));
                assert!(msg.contains("got 15"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_log_level() {
        let mut config = PerceptronConfig::default();
        config.logging.level = "verbose".to_string();

        assert!(validate_config(&config).is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_reports_all_errors_together() {
        let mut config = PerceptronConfig::default();
        config.api.port = 22;
        config.api.host = String::new();
        config.perceptron.initial_bias = f64::NAN;

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("api.port"));
                assert!(msg.contains("api.host"));
                assert!(msg.contains("perceptron.initial_bias"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
