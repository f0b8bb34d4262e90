//! Unified error types for the analytics engine.
//!
//! Precondition failures are detected at component entry and reported
//! synchronously; there is no partial-failure mode. Either a complete
//! result of the requested shape is produced, or nothing is.

use pathwise_core::CoreError;
use pathwise_math::MathError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A simulation or risk parameter is outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The price history is too short to calibrate volatility.
    #[error("insufficient price history: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// The risk estimator was handed a result with no simulated paths.
    ///
    /// `simulate_paths` cannot produce such a result (a zero path count is
    /// rejected up front), but the estimator is separately callable and
    /// checks its own boundary.
    #[error("empty terminal distribution: result contains no simulated paths")]
    EmptyDistribution,

    /// Invalid price observation (from pathwise-core).
    #[error("price history error: {0}")]
    PriceError(String),

    /// Math/statistics error (from pathwise-math).
    #[error("math error: {0}")]
    MathError(String),
}

impl AnalyticsError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientHistory { required, actual } => {
                Self::InsufficientHistory { required, actual }
            }
            CoreError::InvalidParameter { name, reason } => Self::InvalidParameter { name, reason },
            other @ CoreError::InvalidPrice { .. } => Self::PriceError(other.to_string()),
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        Self::MathError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::invalid_parameter("num_simulations", "must be at least 1");
        assert!(err.to_string().contains("num_simulations"));

        let err = AnalyticsError::EmptyDistribution;
        assert!(err.to_string().contains("no simulated paths"));
    }

    #[test]
    fn test_core_error_conversion_preserves_structure() {
        let core = CoreError::insufficient_history(3, 2);
        let analytics = AnalyticsError::from(core);
        assert_eq!(
            analytics,
            AnalyticsError::InsufficientHistory {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_math_error_conversion() {
        let math = MathError::insufficient_data(2, 1);
        let analytics = AnalyticsError::from(math);
        assert!(matches!(analytics, AnalyticsError::MathError(_)));
    }
}
