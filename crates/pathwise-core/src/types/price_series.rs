//! Validated daily closing-price series.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::ReturnSeries;

/// An ordered series of daily closing prices for one instrument.
///
/// Every observation must be a strictly positive, finite number. Ordering is
/// oldest-first: the final element is the most recent close, which anchors a
/// simulation run.
///
/// # Example
///
/// ```rust
/// use pathwise_core::PriceSeries;
///
/// let prices = PriceSeries::new(vec![100.0, 102.0, 101.0])?;
/// assert_eq!(prices.last(), Some(101.0));
/// # Ok::<(), pathwise_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Creates a price series from daily closes, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPrice` if any observation is non-positive,
    /// `NaN`, or infinite.
    pub fn new(closes: Vec<f64>) -> CoreResult<Self> {
        for (index, &value) in closes.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::InvalidPrice { index, value });
            }
        }
        Ok(Self { closes })
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns `true` if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Returns the most recent close, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// Returns the observations as a slice, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.closes
    }

    /// Derives the daily percentage-return series.
    ///
    /// Returns are computed pairwise as `(p[i] - p[i-1]) / p[i-1]` over
    /// consecutive observations; the leading undefined value is excluded,
    /// so the result has one fewer element than the price series.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientHistory` if the series holds fewer
    /// than 2 observations.
    pub fn returns(&self) -> CoreResult<ReturnSeries> {
        if self.closes.len() < 2 {
            return Err(CoreError::insufficient_history(2, self.closes.len()));
        }
        let returns = self
            .closes
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) / pair[0])
            .collect();
        Ok(ReturnSeries::new(returns))
    }
}
