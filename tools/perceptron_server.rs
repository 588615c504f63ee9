// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Perceptron REST API server
//!
//! Usage:
//!   perceptron-server --config perceptron_configuration.toml --port 8000
//!   perceptron-server --debug-perceptron-api

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use perceptron::app;
use perceptron_config::{load_config_or_default, validate_config};
use perceptron_observability::{debug_flags_help, init_logging, CrateDebugFlags};
use tracing::info;

/// Perceptron machine REST API server
#[derive(Parser, Debug)]
#[command(name = "perceptron-server", version, about, after_help = debug_flags_help())]
struct Args {
    /// Path to perceptron_configuration.toml (searched for when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind host (overrides [api] host)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides [api] port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Default log level: trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rotated JSON log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Directory holding the built front end (index.html + assets/)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Args {
    /// Overrides in the form the config loader takes
    fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(host) = &self.host {
            overrides.insert("api_host".to_string(), host.clone());
        }
        if let Some(port) = self.port {
            overrides.insert("api_port".to_string(), port.to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("log_level".to_string(), level.clone());
        }
        if let Some(dir) = &self.log_dir {
            overrides.insert("log_dir".to_string(), dir.display().to_string());
        }
        if let Some(dir) = &self.static_dir {
            overrides.insert("static_dir".to_string(), dir.display().to_string());
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // `--debug-<crate>` flags are not known to clap; split them off first
    let (debug_args, clap_args): (Vec<String>, Vec<String>) =
        std::env::args().partition(|arg| arg.starts_with("--debug-"));
    let mut debug_flags = CrateDebugFlags::from_args(debug_args);
    debug_flags.merge_env();

    let args = Args::parse_from(clap_args);

    let config = load_config_or_default(args.config.as_deref(), Some(&args.config_overrides()))
        .context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let logging_guard = init_logging(&debug_flags, &app::logging_options(&config.logging))?;

    info!(target: "perceptron-api", "Perceptron server v{}", perceptron::VERSION);
    if debug_flags.any_enabled() {
        info!(
            target: "perceptron-api",
            "Debug logging enabled for: {}",
            debug_flags.enabled_crate_names().join(", ")
        );
    }
    if let Some(dir) = logging_guard.log_dir() {
        info!(target: "perceptron-api", "Writing logs to {}", dir.display());
    }

    let router = app::build_router(&config)?;

    let bind_address = config.api.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!(target: "perceptron-api", "Listening on http://{}", bind_address);
    info!(target: "perceptron-api", "OpenAPI document at http://{}/api-docs/openapi.json", bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!(target: "perceptron-api", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "perceptron-api", "Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, keep serving until killed
        std::future::pending::<()>().await;
    }
    info!(target: "perceptron-api", "Shutdown requested");
}
