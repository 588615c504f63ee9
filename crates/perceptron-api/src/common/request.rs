// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Request body extraction

use axum::extract::FromRequest;

use super::ApiError;

/// `axum::Json` whose rejections come back as `ApiError` (422 INVALID_INPUT)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
