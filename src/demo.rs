// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The fixed command-line demonstration

use std::io::Write;

use anyhow::Result;
use perceptron_model::patterns::{demo_patterns, render_grid, sample_weights, SAMPLE_BIAS};
use perceptron_model::Perceptron;

const RULE_WIDTH: usize = 60;

/// Write the demonstration: each pattern as a grid with its output
pub fn write_demo<W: Write>(out: &mut W) -> Result<()> {
    let weights = sample_weights();
    let perceptron = Perceptron::new(weights, SAMPLE_BIAS)?;

    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "{}", heavy)?;
    writeln!(out, "Perceptron Machine Simulation")?;
    writeln!(out, "{}", heavy)?;

    for (i, pattern) in demo_patterns().iter().enumerate() {
        if i > 0 {
            writeln!(out, "\n{}", light)?;
        }
        writeln!(out, "\nInput Pattern ({}):", pattern.name)?;
        writeln!(out, "{}", render_grid(&pattern.inputs))?;

        // Full settings only for the first pattern
        if i == 0 {
            let inputs: Vec<i8> = pattern.inputs.into();
            writeln!(out, "\nInput values: {:?}", inputs)?;
            writeln!(out, "Weights: {:?}", weights.as_slice())?;
            writeln!(out, "Bias: {:?}", perceptron.bias())?;
        }

        let output = perceptron.calculate_output(&pattern.inputs);
        writeln!(out, "\nCalculated Output: {:.2}", output)?;
    }

    writeln!(out, "\n{}", heavy)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut buf = Vec::new();
        write_demo(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_demo_outputs() {
        let text = render();
        let outputs: Vec<&str> = text
            .lines()
            .filter_map(|line| line.strip_prefix("Calculated Output: "))
            .collect();
        assert_eq!(outputs, vec!["2.40", "5.60", "-9.60"]);
    }

    #[test]
    fn test_demo_shows_t_grid() {
        let text = render();
        assert!(text.contains("Input Pattern (T shape):\n  * * * *\n  . * * .\n  . * * .\n  . . . ."));
        assert!(text.contains("Input values: [1, 1, 1, 1, -1, 1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1]"));
        assert!(text.contains("Bias: -2.0"));
    }
}
