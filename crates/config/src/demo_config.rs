// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Yaml},
    Figment,
};
use mathlib_logger::LogLevel;
use serde::{Deserialize, Serialize};

use crate::load_config::{find_in_parent, locate_config};
use crate::validation::{validate, ConfigError};
use crate::{load_with_env, ConfigFormat};

pub const DEFAULT_CONFIG_NAME: &str = "mathlib.config.yaml";

pub const ENV_PREFIX: &str = "MATHLIB_";

/// Environment keys (after the prefix) that may override the file. Nested keys use `__`.
const ENV_KEYS: [&str; 7] = [
    "name",
    "version",
    "log_level",
    "test_values",
    "parameters__tolerance",
    "parameters__max_iterations",
    "parameters__enable_logging",
];

/// Numerical parameters of the demo run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Comparison tolerance for results
    pub tolerance: f64,
    /// Upper bound on iterative work
    pub max_iterations: u32,
    /// Whether the demo emits log lines while it runs
    pub enable_logging: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
            enable_logging: true,
        }
    }
}

/// Configuration consumed by the demo program.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub name: String,
    pub version: String,
    pub parameters: Parameters,
    /// Inputs fed to square and factorial in the results export
    pub test_values: Vec<f64>,
    /// Level used when no `-v`/`-q` flag is given on the command line
    pub log_level: LogLevel,
    /// File this configuration was read from, if any
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "MathLib".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            parameters: Parameters::default(),
            test_values: vec![2.0, 3.5, 5.0, 7.5, 10.0],
            log_level: LogLevel::Debug,
            source: None,
        }
    }
}

impl DemoConfig {
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("mathlib"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Load the config at `cli_file`, or search for `mathlib.config.yaml` from the cwd upwards.
///
/// An explicitly passed file must exist. Without one, a missing file means defaults.
/// `MATHLIB_*` environment variables are applied last.
pub fn load_config(cli_file: Option<String>) -> Result<DemoConfig> {
    let cli_file = cli_file.map(PathBuf::from);
    let location = locate_config(
        find_in_parent,
        &env::current_dir()?,
        &OsDirs::config_dir(),
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref(),
    );

    let mut figment = Figment::from(Serialized::defaults(DemoConfig::default()));
    let mut source = None;

    // a missing fallback file just means defaults
    if location.is_explicit() || location.path().is_file() {
        let path = location.into_path();
        let contents = load_with_env(&path).context("Configuration file not found")?;
        figment = match ConfigFormat::from_path(&path) {
            ConfigFormat::Json => figment.merge(Json::string(&contents)),
            ConfigFormat::Yaml => figment.merge(Yaml::string(&contents)),
        };
        source = Some(path);
    }

    let mut config: DemoConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS).split("__"))
        .extract()
        .context("Could not parse configuration")?;

    config.validate().context("Invalid configuration")?;
    config.source = source;

    Ok(config)
}
