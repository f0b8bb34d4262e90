//! The matrix of simulated price paths produced by one run.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// All simulated price paths from one run, with the calibration context
/// needed to interpret them.
///
/// Conceptually an N×D matrix: one row per path, one column per trading
/// day of the horizon. The caller owns the result for the lifetime of one
/// analysis; nothing is cached or reused across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    paths: Array2<f64>,
    last_price: f64,
    daily_volatility: f64,
}

impl SimulationResult {
    /// Assembles a result from a path matrix and its calibration context.
    ///
    /// Row `i` of `paths` is the `i`-th simulated trajectory; `last_price`
    /// is the observed close the paths are anchored at.
    #[must_use]
    pub fn new(paths: Array2<f64>, last_price: f64, daily_volatility: f64) -> Self {
        Self {
            paths,
            last_price,
            daily_volatility,
        }
    }

    /// Number of simulated paths (matrix rows).
    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.paths.nrows()
    }

    /// Length of each path in trading days (matrix columns).
    #[must_use]
    pub fn horizon_days(&self) -> usize {
        self.paths.ncols()
    }

    /// The most recent observed close the simulation is anchored at.
    ///
    /// The presentation layer draws this as the reference line across the
    /// path chart.
    #[must_use]
    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    /// The calibrated daily volatility (sample standard deviation of
    /// historical daily returns).
    #[must_use]
    pub fn daily_volatility(&self) -> f64 {
        self.daily_volatility
    }

    /// The full path matrix, one row per path.
    #[must_use]
    pub fn paths(&self) -> &Array2<f64> {
        &self.paths
    }

    /// One simulated trajectory, or `None` if `index` is out of range.
    #[must_use]
    pub fn path(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.paths.nrows()).then(|| self.paths.row(index))
    }

    /// The terminal distribution: the final simulated price of every path.
    ///
    /// Empty if the result holds no paths or a zero-day horizon (neither
    /// is produced by the simulator, but the type can be assembled
    /// externally).
    #[must_use]
    pub fn terminal_prices(&self) -> Vec<f64> {
        if self.paths.nrows() == 0 || self.paths.ncols() == 0 {
            return Vec::new();
        }
        self.paths.column(self.paths.ncols() - 1).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_result() -> SimulationResult {
        let paths = array![[101.0, 102.0, 99.0], [100.5, 98.0, 103.0]];
        SimulationResult::new(paths, 100.0, 0.02)
    }

    #[test]
    fn test_shape_accessors() {
        let result = sample_result();
        assert_eq!(result.num_paths(), 2);
        assert_eq!(result.horizon_days(), 3);
        assert_eq!(result.last_price(), 100.0);
        assert_eq!(result.daily_volatility(), 0.02);
    }

    #[test]
    fn test_terminal_prices_is_last_column() {
        let result = sample_result();
        assert_eq!(result.terminal_prices(), vec![99.0, 103.0]);
    }

    #[test]
    fn test_path_view() {
        let result = sample_result();
        let path = result.path(1).unwrap();
        assert_eq!(path.to_vec(), vec![100.5, 98.0, 103.0]);
        assert!(result.path(2).is_none());
    }

    #[test]
    fn test_empty_result_has_empty_terminal_distribution() {
        let result = SimulationResult::new(Array2::zeros((0, 0)), 100.0, 0.02);
        assert!(result.terminal_prices().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
