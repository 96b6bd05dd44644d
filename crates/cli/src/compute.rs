// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use mathlib_logger::{log_error, log_info};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Computation<I: Serialize> {
    input: I,
    result: f64,
}

fn render<I: Serialize>(input: I, result: f64, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&Computation { input, result })?)
    } else {
        Ok(result.to_string())
    }
}

pub fn square(x: f64, json: bool) -> Result<()> {
    log_info!("Computing square of {}", x);
    let result = mathlib::square(x);
    println!("{}", render(x, result, json)?);
    Ok(())
}

pub fn factorial(n: i32, json: bool) -> Result<()> {
    log_info!("Computing factorial of {}", n);
    let result = mathlib::factorial(n).inspect_err(|e| log_error!("{}", e))?;
    println!("{}", render(n, result, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() -> Result<()> {
        assert_eq!(render(7.5, 56.25, false)?, "56.25");
        assert_eq!(render(10, 3628800.0, false)?, "3628800");
        assert_eq!(render(171, f64::INFINITY, false)?, "inf");
        Ok(())
    }

    #[test]
    fn test_render_json() -> Result<()> {
        assert_eq!(render(5, 120.0, true)?, r#"{"input":5,"result":120.0}"#);
        // serde_json has no representation for infinity
        assert_eq!(
            render(171, f64::INFINITY, true)?,
            r#"{"input":171,"result":null}"#
        );
        Ok(())
    }

    #[test]
    fn test_factorial_rejects_negative() {
        let err = factorial(-1, false).unwrap_err();
        assert!(err.downcast_ref::<mathlib::MathError>().is_some());
    }
}
