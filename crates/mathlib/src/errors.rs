// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for math operations.

use thiserror::Error;

/// Errors that can occur during math operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An input violated the precondition of the function it was passed to.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl MathError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MathError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MathError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
