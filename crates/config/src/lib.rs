// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod demo_config;
mod file;
pub mod load_config;
pub mod validation;

pub use demo_config::*;
pub use file::*;
pub use validation::ConfigError;
