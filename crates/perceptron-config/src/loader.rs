// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones win:
//! 1. TOML file (base values, defaults for anything omitted)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, PerceptronConfig, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Find the configuration file
///
/// Search order:
/// 1. `PERCEPTRON_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Load configuration from a TOML file and apply overrides
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the file is not found or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<PerceptronConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    debug!(target: "perceptron-config", "Loading configuration from {}", config_file.display());
    let content = fs::read_to_string(&config_file)?;
    let mut config: PerceptronConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Like [`load_config`] without an explicit path, but a missing file yields
/// defaults (still with overrides applied) instead of an error
///
/// An explicit path that does not exist, or a file that fails to parse, is
/// still an error.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<PerceptronConfig> {
    if config_path.is_some() {
        return load_config(config_path, cli_args);
    }

    match load_config(None, cli_args) {
        Err(ConfigError::FileNotFound(msg)) => {
            warn!(target: "perceptron-config", "No configuration file found, using defaults");
            debug!(target: "perceptron-config", "{}", msg);

            let mut config = PerceptronConfig::default();
            apply_environment_overrides(&mut config);
            if let Some(cli) = cli_args {
                apply_cli_overrides(&mut config, cli);
            }
            Ok(config)
        }
        other => other,
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `PERCEPTRON_API_HOST` -> `api.host`
/// - `PERCEPTRON_API_PORT` -> `api.port`
/// - `PERCEPTRON_LOG_LEVEL` -> `logging.level`
/// - `PERCEPTRON_LOG_DIR` -> `logging.log_dir`
/// - `PERCEPTRON_STATIC_DIR` -> `frontend.static_dir`
pub fn apply_environment_overrides(config: &mut PerceptronConfig) {
    if let Ok(value) = env::var("PERCEPTRON_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("PERCEPTRON_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Ok(value) = env::var("PERCEPTRON_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("PERCEPTRON_LOG_DIR") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
    if let Ok(value) = env::var("PERCEPTRON_STATIC_DIR") {
        config.frontend.static_dir = PathBuf::from(value);
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - CLI arguments keyed by name (e.g., `{"api_host": "127.0.0.1", "api_port": "9000"}`)
pub fn apply_cli_overrides(config: &mut PerceptronConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("api_host") {
        config.api.host = value.clone();
    }
    if let Some(value) = cli_args.get("api_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_dir") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
    if let Some(value) = cli_args.get("static_dir") {
        config.frontend.static_dir = PathBuf::from(value);
    }
}
