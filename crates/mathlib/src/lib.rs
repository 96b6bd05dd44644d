// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # MathLib
//!
//! Two pure scalar functions over IEEE-754 double precision values.
//!
//! ## Features
//!
//! - [`square`]: `x * x` by direct multiplication, total over every `f64`.
//! - [`factorial`]: iterative `n!` for `n >= 0`, rejecting negative input with
//!   [`MathError::InvalidArgument`].
//!
//! ## Numerical Limits
//!
//! - `factorial(n)` is exact for `n <= 20` since `20!` fits the 53-bit mantissa.
//! - For `21 <= n <= 170` the result is the rounded double product.
//! - For `n > 170` the product overflows to `f64::INFINITY`. Overflow is a numeric
//!   outcome, not an error.
//!
//! Both functions hold no state and perform no I/O, so they may be called from any
//! number of threads without synchronization.

pub mod errors;
pub mod functions;

pub use errors::{MathError, Result};
pub use functions::{factorial, square, FACTORIAL_EXACT_LIMIT, FACTORIAL_FINITE_LIMIT};
