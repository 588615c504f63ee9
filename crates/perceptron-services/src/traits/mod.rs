// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service trait definitions.
*/

pub mod perceptron_service;

pub use perceptron_service::PerceptronService;
