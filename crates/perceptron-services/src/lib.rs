// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Perceptron Service Layer

Transport-agnostic boundary between adapters (the REST API, the CLI) and the
perceptron model. The service owns the process-lifetime machine state.

```text
┌──────────────────────────────────────────┐
│        TRANSPORT ADAPTERS (axum)         │
└────────────────────┬─────────────────────┘
                     ↓
┌──────────────────────────────────────────┐
│   SERVICE LAYER (this crate)             │
│   PerceptronService - state + calculate  │
└────────────────────┬─────────────────────┘
                     ↓
┌──────────────────────────────────────────┐
│   DOMAIN LAYER (perceptron-model)        │
└──────────────────────────────────────────┘
```

Adapters depend on the trait, not the implementation:

```rust
use perceptron_services::{PerceptronService, PerceptronServiceImpl};
use std::sync::Arc;

let service: Arc<dyn PerceptronService + Send + Sync> = Arc::new(PerceptronServiceImpl::new());
```
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod impls;
pub mod traits;
pub mod types;

pub use impls::PerceptronServiceImpl;
pub use traits::PerceptronService;
pub use types::*;
