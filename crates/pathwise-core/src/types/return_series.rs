//! Daily percentage-return series.

use serde::{Deserialize, Serialize};

/// An ordered series of daily percentage returns.
///
/// Usually derived from a [`crate::PriceSeries`] via
/// [`crate::PriceSeries::returns`]; the volatility calibration in the
/// simulation engine consumes this type. Returns are expressed as decimals
/// (`-0.01` for a one-percent daily loss).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    returns: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a return series from raw daily returns, oldest first.
    #[must_use]
    pub fn new(returns: Vec<f64>) -> Self {
        Self { returns }
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns `true` if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Returns the observations as a slice, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.returns
    }
}
