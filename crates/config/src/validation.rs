// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

use crate::DemoConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),

    #[error("max_iterations must be greater than zero")]
    InvalidMaxIterations,

    #[error("test value at index {index} is not finite: {value}")]
    NonFiniteTestValue { index: usize, value: f64 },
}

pub fn validate(config: &DemoConfig) -> Result<(), ConfigError> {
    let tolerance = config.parameters.tolerance;
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ConfigError::InvalidTolerance(tolerance));
    }

    if config.parameters.max_iterations == 0 {
        return Err(ConfigError::InvalidMaxIterations);
    }

    if let Some((index, value)) = config
        .test_values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        return Err(ConfigError::NonFiniteTestValue {
            index,
            value: *value,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate(&DemoConfig::default()), Ok(()));
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let mut config = DemoConfig::default();
        config.parameters.tolerance = 0.0;
        assert_eq!(validate(&config), Err(ConfigError::InvalidTolerance(0.0)));

        config.parameters.tolerance = f64::INFINITY;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let mut config = DemoConfig::default();
        config.parameters.max_iterations = 0;
        assert_eq!(validate(&config), Err(ConfigError::InvalidMaxIterations));
    }

    #[test]
    fn test_rejects_non_finite_test_value() {
        let mut config = DemoConfig::default();
        config.test_values = vec![1.0, f64::NEG_INFINITY];
        assert_eq!(
            validate(&config),
            Err(ConfigError::NonFiniteTestValue {
                index: 1,
                value: f64::NEG_INFINITY
            })
        );
    }
}
