// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Scalar math functions.

use crate::errors::{MathError, Result};

/// Largest `n` for which [`factorial`] returns the exact integer value.
pub const FACTORIAL_EXACT_LIMIT: i32 = 20;

/// Largest `n` for which [`factorial`] returns a finite value.
pub const FACTORIAL_FINITE_LIMIT: i32 = 170;

/// Computes the square of a number.
///
/// The result is `x * x` by direct multiplication. `powi`/`powf` are avoided since
/// they may round differently from a single multiply.
///
/// The function is total: values whose square exceeds `f64::MAX` give
/// `f64::INFINITY`, `±∞` gives `+∞` and `NaN` gives `NaN`.
///
/// # Arguments
///
/// * `x` - The input value.
///
/// # Returns
///
/// The square of `x`.
///
/// # Example
///
/// ```
/// assert_eq!(mathlib::square(5.0), 25.0);
/// assert_eq!(mathlib::square(-1.5), 2.25);
/// ```
#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Computes the factorial of a non-negative integer.
///
/// `0!` and `1!` are `1.0`. For `n >= 2` the product `2 × 3 × ... × n` is
/// accumulated iteratively in ascending order starting from `1.0`, so stack usage
/// is constant regardless of `n`.
///
/// # Arguments
///
/// * `n` - The input integer.
///
/// # Returns
///
/// `n!` as an `f64`: exact up to [`FACTORIAL_EXACT_LIMIT`], rounded up to
/// [`FACTORIAL_FINITE_LIMIT`] and `f64::INFINITY` beyond.
///
/// # Errors
///
/// Returns [`MathError::InvalidArgument`] if `n < 0`.
///
/// # Example
///
/// ```
/// assert_eq!(mathlib::factorial(5).unwrap(), 120.0);
/// assert!(mathlib::factorial(-1).is_err());
/// ```
pub fn factorial(n: i32) -> Result<f64> {
    if n < 0 {
        return Err(MathError::invalid_argument(
            "factorial of negative number is undefined",
        ));
    }

    if n == 0 || n == 1 {
        return Ok(1.0);
    }

    let mut result = 1.0;
    for i in 2..=n {
        result *= f64::from(i);
        // inf * k stays inf for every remaining k
        if result.is_infinite() {
            break;
        }
    }

    Ok(result)
}
