//! Error types for the Pathwise core library.
//!
//! This module defines the error types shared by the core types,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core type construction and validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A closing price was not a positive finite number.
    #[error("invalid price at index {index}: {value}")]
    InvalidPrice {
        /// Position of the offending observation in the series.
        index: usize,
        /// The value that was provided.
        value: f64,
    },

    /// The price history is too short for the requested derivation.
    #[error("insufficient price history: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// A simulation parameter is outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Creates an insufficient history error.
    #[must_use]
    pub fn insufficient_history(required: usize, actual: usize) -> Self {
        Self::InsufficientHistory { required, actual }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
