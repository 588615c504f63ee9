// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Built front-end bundle at `/`

use std::path::Path;

use axum::response::{Html, IntoResponse, Response};

use crate::common::Json;
use crate::v1::MessageResponse;

pub const FRONTEND_MISSING_MESSAGE: &str = "Frontend not built. Run: cd frontend && npm run build";

/// Serve `index.html`, or a JSON hint when the bundle has not been built
pub async fn serve_index(index_file: &Path) -> Response {
    match tokio::fs::read_to_string(index_file).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::debug!(
                target: "perceptron-api",
                "No front end at {}: {}",
                index_file.display(),
                e
            );
            Json(MessageResponse {
                message: FRONTEND_MISSING_MESSAGE.to_string(),
            })
            .into_response()
        }
    }
}
