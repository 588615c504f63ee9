// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to one section of `perceptron_configuration.toml`.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PerceptronConfig {
    pub api: ApiConfig,
    pub cors: CorsConfig,
    pub frontend: FrontendConfig,
    pub logging: LoggingConfig,
    pub perceptron: InitialStateConfig,
}

/// REST API server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ApiConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin settings for the browser front end
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    /// Ignore `allowed_origins` and accept every origin
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // Vite dev server and the CRA-style fallback port
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            allow_any_origin: false,
        }
    }
}

/// Pre-built UI bundle served next to the API
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub enabled: bool,
    pub static_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl FrontendConfig {
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.static_dir.join("assets")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    /// Directory for rotated log files; console only when unset
    pub log_dir: Option<PathBuf>,
    /// Emit JSON lines on the console instead of human-readable text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            json: false,
        }
    }
}

/// Knob settings loaded into the machine at startup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InitialStateConfig {
    /// Exactly 16 weights when present; all zeros otherwise
    pub initial_weights: Option<Vec<f64>>,
    pub initial_bias: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: PerceptronConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(config.perceptron.initial_weights.is_none());
        assert_eq!(config.perceptron.initial_bias, 0.0);
    }

    #[test]
    fn test_partial_section() {
        let config: PerceptronConfig = toml::from_str(
            r#"
            [api]
            port = 9100

            [perceptron]
            initial_bias = -2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9100);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.perceptron.initial_bias, -2.0);
    }

    #[test]
    fn test_bind_address() {
        let api = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8123,
        };
        assert_eq!(api.bind_address(), "127.0.0.1:8123");
    }

    #[test]
    fn test_frontend_paths() {
        let frontend = FrontendConfig::default();
        assert_eq!(frontend.index_file(), PathBuf::from("static/index.html"));
        assert_eq!(frontend.assets_dir(), PathBuf::from("static/assets"));
    }

    #[test]
    fn test_serializes_back_to_json() {
        let value = serde_json::to_value(PerceptronConfig::default()).unwrap();
        assert_eq!(value["api"]["port"], 8000);
        assert_eq!(value["logging"]["level"], "info");
    }
}
