// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

mod cli;
mod compare;
mod compute;
mod demo;

pub fn main() -> ExitCode {
    match Cli::parse().execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
