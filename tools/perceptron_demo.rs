// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Prints the perceptron demonstration: the T shape, all UP and all DOWN
//! patterns with the sample weights and bias.

use anyhow::Result;

fn main() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    perceptron::demo::write_demo(&mut out)
}
