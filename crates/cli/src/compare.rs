// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Benchmark regression checks between two result files.

use std::collections::HashMap;
use std::fmt::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use mathlib_logger::{log_debug, log_warn};
use serde::Deserialize;

pub const DEFAULT_THRESHOLD: f64 = 1.20;
pub const DEFAULT_WARNING_THRESHOLD: f64 = 1.10;

/// Ratios below this count as an improvement.
pub const IMPROVEMENT_THRESHOLD: f64 = 0.90;

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkReport {
    pub benchmarks: Vec<BenchmarkRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    pub cpu_time: f64,
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

fn default_time_unit() -> String {
    "ns".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub regression: f64,
    pub warning: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            regression: DEFAULT_THRESHOLD,
            warning: DEFAULT_WARNING_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub name: String,
    pub baseline: f64,
    pub current: f64,
    pub unit: String,
    pub ratio: f64,
}

impl Change {
    pub fn change_pct(&self) -> f64 {
        (self.ratio - 1.0) * 100.0
    }
}

#[derive(Debug, Default)]
pub struct Comparison {
    pub regressions: Vec<Change>,
    pub warnings: Vec<Change>,
    pub improvements: Vec<Change>,
    pub unchanged: Vec<Change>,
    pub new_benchmarks: Vec<BenchmarkRecord>,
}

impl Comparison {
    pub fn has_regression(&self) -> bool {
        !self.regressions.is_empty()
    }

    pub fn has_warning(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Benchmarks present in both files.
    pub fn total(&self) -> usize {
        self.regressions.len() + self.warnings.len() + self.improvements.len() + self.unchanged.len()
    }

    pub fn should_fail(&self, fail_on_warning: bool) -> bool {
        self.has_regression() || (fail_on_warning && self.has_warning())
    }
}

/// Scales a time to the largest unit that keeps it readable.
pub fn format_time(value: f64, unit: &str) -> String {
    match unit {
        "ns" if value > 1_000_000.0 => format!("{:10.2} ms", value / 1_000_000.0),
        "ns" if value > 1_000.0 => format!("{:10.2} us", value / 1_000.0),
        "us" | "ms" if value > 1_000.0 => {
            let next = if unit == "us" { "ms" } else { "s" };
            format!("{:10.2} {}", value / 1_000.0, next)
        }
        _ => format!("{:10.2} {}", value, unit),
    }
}

pub fn compare(
    baseline: &BenchmarkReport,
    current: &BenchmarkReport,
    thresholds: Thresholds,
) -> Comparison {
    let baseline_map: HashMap<&str, &BenchmarkRecord> = baseline
        .benchmarks
        .iter()
        .map(|b| (b.name.as_str(), b))
        .collect();

    let mut comparison = Comparison::default();

    for bench in &current.benchmarks {
        let Some(base) = baseline_map.get(bench.name.as_str()) else {
            comparison.new_benchmarks.push(bench.clone());
            continue;
        };

        let ratio = bench.cpu_time / base.cpu_time;
        let change = Change {
            name: bench.name.clone(),
            baseline: base.cpu_time,
            current: bench.cpu_time,
            unit: bench.time_unit.clone(),
            ratio,
        };
        log_debug!("{}: ratio {:.3}", change.name, ratio);

        if ratio > thresholds.regression {
            comparison.regressions.push(change);
        } else if ratio > thresholds.warning {
            comparison.warnings.push(change);
        } else if ratio < IMPROVEMENT_THRESHOLD {
            comparison.improvements.push(change);
        } else {
            comparison.unchanged.push(change);
        }
    }

    comparison
}

fn write_changes(out: &mut String, title: &str, changes: &[Change], marker: &str) -> std::fmt::Result {
    if changes.is_empty() {
        return Ok(());
    }

    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for c in changes {
        writeln!(out, "  {}", c.name)?;
        writeln!(out, "    Baseline: {}", format_time(c.baseline, &c.unit))?;
        writeln!(out, "    Current:  {}", format_time(c.current, &c.unit))?;
        writeln!(out, "    Change:   {:+.1}%{}", c.change_pct(), marker)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_report(
    comparison: &Comparison,
    baseline_label: &str,
    current_label: &str,
    thresholds: Thresholds,
) -> Result<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let regression_pct = (thresholds.regression - 1.0) * 100.0;
    let warning_pct = (thresholds.warning - 1.0) * 100.0;
    let mut out = String::new();

    writeln!(out, "{rule}")?;
    writeln!(out, "PERFORMANCE COMPARISON REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Baseline: {baseline_label}")?;
    writeln!(out, "Current:  {current_label}")?;
    writeln!(out, "Regression threshold: {regression_pct:.0}%")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    write_changes(
        &mut out,
        &format!("PERFORMANCE REGRESSIONS (>{regression_pct:.0}% slower):"),
        &comparison.regressions,
        "  !!",
    )?;
    write_changes(
        &mut out,
        &format!("PERFORMANCE WARNINGS (>{warning_pct:.0}% slower):"),
        &comparison.warnings,
        "",
    )?;
    write_changes(
        &mut out,
        "PERFORMANCE IMPROVEMENTS (>10% faster):",
        &comparison.improvements,
        "  ok",
    )?;

    if !comparison.new_benchmarks.is_empty() {
        writeln!(out, "NEW BENCHMARKS:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for b in &comparison.new_benchmarks {
            writeln!(out, "  {}", b.name)?;
            writeln!(out, "    Time: {}", format_time(b.cpu_time, &b.time_unit))?;
            writeln!(out)?;
        }
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "SUMMARY:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "  Total benchmarks:    {}", comparison.total())?;
    writeln!(out, "  Regressions:         {}", comparison.regressions.len())?;
    writeln!(out, "  Warnings:            {}", comparison.warnings.len())?;
    writeln!(out, "  Improvements:        {}", comparison.improvements.len())?;
    writeln!(out, "  Unchanged:           {}", comparison.unchanged.len())?;
    writeln!(out, "  New:                 {}", comparison.new_benchmarks.len())?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    if comparison.has_regression() {
        writeln!(out, "PERFORMANCE REGRESSION DETECTED!")?;
        writeln!(
            out,
            "   {} benchmark(s) are >{regression_pct:.0}% slower than baseline.",
            comparison.regressions.len()
        )?;
        writeln!(out, "   Please investigate before merging.")?;
    } else if comparison.has_warning() {
        writeln!(out, "PERFORMANCE WARNING")?;
        writeln!(
            out,
            "   {} benchmark(s) are slightly slower than baseline.",
            comparison.warnings.len()
        )?;
        writeln!(out, "   Consider reviewing these changes.")?;
    } else {
        writeln!(out, "No significant performance regressions detected.")?;
        if !comparison.improvements.is_empty() {
            writeln!(
                out,
                "   {} benchmark(s) improved!",
                comparison.improvements.len()
            )?;
        }
    }
    write!(out, "{rule}")?;

    Ok(out)
}

impl BenchmarkReport {
    /// Every `cpu_time` must be a positive finite number for ratios to mean anything.
    pub fn validate(&self) -> Result<()> {
        for bench in &self.benchmarks {
            if !(bench.cpu_time.is_finite() && bench.cpu_time > 0.0) {
                bail!(
                    "Benchmark '{}' has invalid cpu_time {}, expected a positive number",
                    bench.name,
                    bench.cpu_time
                );
            }
        }
        Ok(())
    }
}

pub fn load_report(path: &Path) -> Result<BenchmarkReport> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("File '{}' not found", path.display()))?;
    let report: BenchmarkReport = serde_json::from_str(&contents)
        .with_context(|| format!("File '{}' is not valid benchmark JSON", path.display()))?;
    report
        .validate()
        .with_context(|| format!("File '{}' contains invalid timings", path.display()))?;
    Ok(report)
}

pub fn execute(
    baseline: &Path,
    current: &Path,
    threshold: f64,
    warning_threshold: f64,
) -> Result<Comparison> {
    if !(threshold.is_finite() && threshold > 0.0) {
        bail!("--threshold must be a positive ratio, got {threshold}");
    }
    if !(warning_threshold.is_finite() && warning_threshold > 0.0) {
        bail!("--warning-threshold must be a positive ratio, got {warning_threshold}");
    }

    let thresholds = Thresholds {
        regression: threshold,
        warning: warning_threshold,
    };
    let comparison = compare(&load_report(baseline)?, &load_report(current)?, thresholds);

    println!(
        "{}",
        render_report(
            &comparison,
            &baseline.display().to_string(),
            &current.display().to_string(),
            thresholds,
        )?
    );

    if comparison.has_regression() {
        log_warn!(
            "{} benchmark(s) regressed past {}",
            comparison.regressions.len(),
            threshold
        );
    }

    Ok(comparison)
}
