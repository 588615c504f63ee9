// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Reference switch patterns and knob settings used by the demonstration
//!
//! The panel is a 4x4 grid read row by row:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```

use crate::vectors::{Bias, InputVector, Switch, WeightVector};
use crate::INPUT_COUNT;

/// Switches per grid row
pub const GRID_SIDE: usize = 4;

const U: Switch = Switch::Up;
const D: Switch = Switch::Down;

/// "T" shape: top row up, middle columns of rows 2-3 up, bottom row down
pub const T_PATTERN: InputVector = InputVector::new([
    U, U, U, U, //
    D, U, U, D, //
    D, U, U, D, //
    D, D, D, D, //
]);

/// Weights tuned to favour the "T" shape
pub const SAMPLE_WEIGHTS: [f64; INPUT_COUNT] = [
    0.5, 0.5, 0.5, 0.5, //
    0.2, 1.0, 1.0, 0.2, //
    0.2, 1.0, 1.0, 0.2, //
    0.2, 0.2, 0.2, 0.2, //
];

pub const SAMPLE_BIAS: Bias = -2.0;

pub fn sample_weights() -> WeightVector {
    WeightVector::from_finite(SAMPLE_WEIGHTS)
}

/// A named input pattern
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub inputs: InputVector,
}

/// Patterns shown by the demonstration, in display order
pub fn demo_patterns() -> [Pattern; 3] {
    [
        Pattern {
            name: "T shape",
            inputs: T_PATTERN,
        },
        Pattern {
            name: "All UP",
            inputs: InputVector::all_up(),
        },
        Pattern {
            name: "All DOWN",
            inputs: InputVector::all_down(),
        },
    ]
}

/// Render the panel as a grid, `*` for UP and `.` for DOWN, one row per line
pub fn render_grid(inputs: &InputVector) -> String {
    inputs
        .switches()
        .chunks(GRID_SIDE)
        .map(|row| {
            let cells: Vec<&str> = row
                .iter()
                .map(|switch| match switch {
                    Switch::Up => "*",
                    Switch::Down => ".",
                })
                .collect();
            format!("  {}", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_pattern_values() {
        let expected = [
            1.0, 1.0, 1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
        ];
        assert_eq!(T_PATTERN.values(), expected);
    }

    #[test]
    fn test_render_t_pattern() {
        let grid = render_grid(&T_PATTERN);
        assert_eq!(grid, "  * * * *\n  . * * .\n  . * * .\n  . . . .");
    }

    #[test]
    fn test_render_all_down() {
        let grid = render_grid(&InputVector::all_down());
        assert_eq!(grid.lines().count(), GRID_SIDE);
        assert!(grid.lines().all(|line| line == "  . . . ."));
    }

    #[test]
    fn test_sample_weights_are_valid() {
        assert_eq!(WeightVector::new(SAMPLE_WEIGHTS).unwrap(), sample_weights());
    }
}
