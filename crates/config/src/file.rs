// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use anyhow::{Context, Result};

/// On-disk syntax of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON, anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Reads a configuration file and substitutes `$VAR` / `${VAR}` from the environment.
pub fn load_with_env(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)?;
    let expanded = shellexpand::env(&contents)
        .with_context(|| format!("Could not expand environment variables in {}", path.display()))?;
    Ok(expanded.into_owned())
}
