// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Perceptron REST API Layer
//
// HTTP (axum) adapter over the perceptron service layer. All routes live
// under `/api`; handlers translate JSON bodies into service calls.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod openapi;
pub mod transports;
pub mod v1;

// Re-export commonly used types
pub use common::{ApiError, ApiErrorCode, ApiResult, ApiState};
pub use transports::http::server::create_http_server;
