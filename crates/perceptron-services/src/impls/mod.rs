// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service implementations backed by `perceptron-model`.
*/

pub mod perceptron_service_impl;

pub use perceptron_service_impl::PerceptronServiceImpl;
