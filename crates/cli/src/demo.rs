// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use mathlib::{factorial, square};
use mathlib_config::DemoConfig;
use mathlib_logger::{log_debug, log_info, log_warn};
use serde::Serialize;

const BASIC_SQUARE_INPUT: f64 = 7.5;
const BASIC_FACTORIAL_INPUT: i32 = 10;

/// One row of the results export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub input: f64,
    pub square: f64,
    /// `None` when the truncated input is negative
    pub factorial: Option<f64>,
}

impl ResultEntry {
    /// Factorial takes the input truncated toward zero.
    pub fn compute(input: f64) -> Self {
        let n = input.trunc() as i32;
        let factorial = match factorial(n) {
            Ok(value) => Some(value),
            Err(e) => {
                log_warn!("Skipping factorial of {}: {}", input, e);
                None
            }
        };

        Self {
            input,
            square: square(input),
            factorial,
        }
    }
}

pub fn compute_results(values: &[f64]) -> Vec<ResultEntry> {
    values
        .iter()
        .map(|&value| {
            let entry = ResultEntry::compute(value);
            log_debug!(
                "Processed value: {} -> square={}, factorial={:?}",
                entry.input,
                entry.square,
                entry.factorial
            );
            entry
        })
        .collect()
}

fn format_values(values: &[f64]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

fn table_row(entry: &ResultEntry) -> String {
    let factorial = match entry.factorial {
        Some(value) => format!("Factorial: {:12.2}", value),
        None => format!("Factorial: {:>12}", "n/a"),
    };
    format!(
        "  {} | {} | {}",
        format!("Input: {:6.2}", entry.input).cyan(),
        format!("Square: {:8.2}", entry.square).yellow(),
        factorial.magenta()
    )
}

pub fn execute(config: &DemoConfig, json_out: Option<PathBuf>) -> Result<()> {
    println!(
        "{}\n",
        format!("=== {} v{} Demo ===", config.name, config.version)
            .bold()
            .green()
    );

    println!("{}", "Example 1: Basic Operations".bold());
    log_info!("Computing square of {}", BASIC_SQUARE_INPUT);
    println!(
        "  square({}) = {}",
        BASIC_SQUARE_INPUT,
        square(BASIC_SQUARE_INPUT)
    );
    log_info!("Computing factorial of {}", BASIC_FACTORIAL_INPUT);
    println!(
        "  factorial({}) = {}\n",
        BASIC_FACTORIAL_INPUT,
        factorial(BASIC_FACTORIAL_INPUT)?
    );

    println!("{}", "Example 2: Configuration".bold());
    log_debug!("Configuration: {}", config.to_json_pretty()?);
    println!("  Configuration loaded:");
    println!("    Name: {}", config.name);
    println!("    Tolerance: {:e}", config.parameters.tolerance);
    println!("    Test values: {}\n", format_values(&config.test_values));

    println!("{}", "Example 3: Results Export".bold());
    let results = compute_results(&config.test_values);
    let results_json = serde_json::to_string_pretty(&results)?;
    println!("  Results (JSON):\n{}\n", results_json);

    if let Some(path) = json_out {
        std::fs::write(&path, &results_json)
            .with_context(|| format!("Could not write results to {}", path.display()))?;
        log_info!("Results written to {}", path.display());
    }

    println!("{}", "Example 4: Colored Output".bold());
    for entry in &results {
        println!("{}", table_row(entry));
    }

    println!("\n{}", "=== Demo completed ===".bold().green());
    log_info!("Example completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_for_default_values() {
        let results = compute_results(&DemoConfig::default().test_values);
        let expected = [
            (2.0, 4.0, 2.0),
            (3.5, 12.25, 6.0),
            (5.0, 25.0, 120.0),
            (7.5, 56.25, 5040.0),
            (10.0, 100.0, 3628800.0),
        ];

        assert_eq!(results.len(), expected.len());
        for (entry, (input, sq, fact)) in results.iter().zip(expected) {
            assert_eq!(entry.input, input);
            assert_eq!(entry.square, sq);
            assert_eq!(entry.factorial, Some(fact));
        }
    }

    #[test]
    fn test_negative_input_has_no_factorial() {
        let entry = ResultEntry::compute(-2.5);
        assert_eq!(entry.square, 6.25);
        assert_eq!(entry.factorial, None);

        // truncation toward zero keeps -0.5 at 0!
        assert_eq!(ResultEntry::compute(-0.5).factorial, Some(1.0));
    }

    #[test]
    fn test_results_json_shape() -> Result<()> {
        let json = serde_json::to_value(compute_results(&[5.0, -1.0]))?;
        assert_eq!(
            json,
            serde_json::json!([
                {"input": 5.0, "square": 25.0, "factorial": 120.0},
                {"input": -1.0, "square": 1.0, "factorial": null}
            ])
        );
        Ok(())
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[2.0, 3.5, 10.0]), "[2, 3.5, 10]");
        assert_eq!(format_values(&[]), "[]");
    }

    #[test]
    fn test_table_row_layout() {
        colored::control::set_override(false);
        let row = table_row(&ResultEntry::compute(7.5));
        assert_eq!(
            row,
            "  Input:   7.50 | Square:    56.25 | Factorial:      5040.00"
        );

        let row = table_row(&ResultEntry::compute(-3.0));
        assert!(row.ends_with("Factorial:          n/a"));
    }
}
