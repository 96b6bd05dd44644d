// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mathlib_config::{load_config, DemoConfig};
use mathlib_logger::{LogLevel, Logger};
use tracing::{debug, info, instrument};

use crate::{compare, compute, demo};

#[derive(Parser, Debug)]
#[command(name = "mathlib")]
#[command(version)]
#[command(about = "Square and factorial from the command line, plus the MathLib demo and benchmark tooling", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Raise the log level by adding additional `-v` arguments. Eg. `mathlib -vvv` will give you
    /// trace level output. Without `-v` the config `log_level` applies
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Only log errors. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

impl Cli {
    pub fn log_level(&self, config: &DemoConfig) -> LogLevel {
        if self.quiet {
            return LogLevel::Error;
        }

        match self.verbose {
            0 if config.parameters.enable_logging => config.log_level,
            0 => LogLevel::Error,
            1 => LogLevel::Info,  // -v
            2 => LogLevel::Debug, // -vv
            _ => LogLevel::Trace, // -vvv
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<ExitCode> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let config = load_config(self.config.clone())?;
        Logger::init(self.log_level(&config))?;
        match config.config_file() {
            Some(file) => info!("Config loaded from: {:?}", file),
            None => debug!("No configuration file found, using defaults"),
        }

        let command = self.command.unwrap_or(Commands::Demo { json_out: None });
        match command {
            Commands::Demo { json_out } => demo::execute(&config, json_out)?,
            Commands::Square { x, json } => compute::square(x, json)?,
            Commands::Factorial { n, json } => compute::factorial(n, json)?,
            Commands::Compare {
                baseline,
                current,
                threshold,
                warning_threshold,
                fail_on_warning,
            } => {
                let outcome = compare::execute(&baseline, &current, threshold, warning_threshold)?;
                if outcome.should_fail(fail_on_warning) {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MathLib demo: basic operations, configuration, JSON export and a colored table
    Demo {
        /// Also write the exported results to this file
        #[arg(long)]
        json_out: Option<PathBuf>,
    },

    /// Print the square of a number
    Square {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Print `{"input": .., "result": ..}` instead of the bare value
        #[arg(long)]
        json: bool,
    },

    /// Print the factorial of a non-negative integer
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,

        /// Print `{"input": .., "result": ..}` instead of the bare value
        #[arg(long)]
        json: bool,
    },

    /// Compare two benchmark result files and flag performance regressions
    Compare {
        /// Baseline benchmark JSON file
        baseline: PathBuf,

        /// Current benchmark JSON file
        current: PathBuf,

        /// Regression threshold as a ratio, 1.20 = 20% slower
        #[arg(long, default_value_t = compare::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Warning threshold as a ratio, 1.10 = 10% slower
        #[arg(long, default_value_t = compare::DEFAULT_WARNING_THRESHOLD)]
        warning_threshold: f64,

        /// Exit with an error code on warnings, not just regressions
        #[arg(long)]
        fail_on_warning: bool,
    },
}
