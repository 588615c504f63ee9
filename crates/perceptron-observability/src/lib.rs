// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # perceptron-observability
//!
//! Logging infrastructure shared by the perceptron crates, with per-crate
//! debug flag support.
//!
//! ## Features
//! - `file-logging` (default): JSON log files with daily rotation

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Log targets that accept debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "perceptron-api",
    "perceptron-services",
    "perceptron-config",
];
