// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Endpoint handlers

pub mod frontend;
pub mod perceptron;
pub mod system;
