//! Monte Carlo Value-at-Risk from the terminal-price distribution.

use serde::{Deserialize, Serialize};

use pathwise_math::percentile;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::simulation::SimulationResult;

/// The dashboard's confidence level.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// VaR calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaRMethod {
    /// Monte Carlo simulation (the only method implemented here).
    MonteCarlo,
}

/// Value at Risk result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaRResult {
    /// The VaR value in price units. Positive means potential loss;
    /// negative means the tail quantile sits above the current price.
    pub var: f64,
    /// Confidence level (e.g., 0.95 for 95%).
    pub confidence_level: f64,
    /// Time horizon in days the simulation covered.
    pub horizon_days: usize,
    /// Method used for calculation.
    pub method: VaRMethod,
}

impl std::fmt::Display for VaRResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.0}%, {}d): ${:.2}",
            self.confidence_level * 100.0,
            self.horizon_days,
            self.var
        )
    }
}

/// Estimates VaR from a simulation result at the given confidence level.
///
/// Extracts the terminal distribution (the final price of every path),
/// takes its `(1 − confidence) × 100`-th percentile with linear
/// interpolation between closest ranks, and returns
/// `last_price − percentile` in price units.
///
/// # Arguments
///
/// * `result` - A populated simulation result
/// * `confidence_level` - Confidence level in (0, 1), e.g. 0.95 for 95%
///
/// # Errors
///
/// - `InvalidParameter` if `confidence_level` is outside (0, 1)
/// - `EmptyDistribution` if `result` holds no paths
pub fn monte_carlo_var(
    result: &SimulationResult,
    confidence_level: f64,
) -> AnalyticsResult<VaRResult> {
    if !confidence_level.is_finite() || confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(AnalyticsError::invalid_parameter(
            "confidence_level",
            format!("must be strictly between 0 and 1, got {confidence_level}"),
        ));
    }

    let terminal = result.terminal_prices();
    if terminal.is_empty() {
        return Err(AnalyticsError::EmptyDistribution);
    }

    let tail_price = percentile(&terminal, (1.0 - confidence_level) * 100.0)?;
    Ok(VaRResult {
        var: result.last_price() - tail_price,
        confidence_level,
        horizon_days: result.horizon_days(),
        method: VaRMethod::MonteCarlo,
    })
}

/// Estimates VaR at the dashboard's fixed 95% confidence level.
///
/// # Errors
///
/// Same contract as [`monte_carlo_var`].
pub fn var_95(result: &SimulationResult) -> AnalyticsResult<VaRResult> {
    monte_carlo_var(result, DEFAULT_CONFIDENCE_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    fn result_with_terminals(terminals: &[f64], last_price: f64) -> SimulationResult {
        // Two-day horizon: first column is irrelevant to the estimator.
        let mut paths = Array2::zeros((terminals.len(), 2));
        for (i, &t) in terminals.iter().enumerate() {
            paths[[i, 0]] = last_price;
            paths[[i, 1]] = t;
        }
        SimulationResult::new(paths, last_price, 0.02)
    }

    #[test]
    fn test_var_zero_when_terminals_equal_last_price() {
        let result = result_with_terminals(&[100.0; 20], 100.0);
        let var = var_95(&result).unwrap();
        assert_relative_eq!(var.var, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_var_positive_when_all_terminals_below() {
        let result = result_with_terminals(&[90.0, 92.0, 95.0, 97.0, 99.0], 100.0);
        let var = var_95(&result).unwrap();
        assert!(var.var > 0.0);
    }

    #[test]
    fn test_var_negative_when_all_terminals_above() {
        // "No downside at 95% confidence" is a valid outcome, not an error.
        let result = result_with_terminals(&[101.0, 103.0, 105.0, 110.0], 100.0);
        let var = var_95(&result).unwrap();
        assert!(var.var < 0.0);
    }

    #[test]
    fn test_var_uses_interpolated_fifth_percentile() {
        let terminals: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = result_with_terminals(&terminals, 100.0);
        let var = var_95(&result).unwrap();
        // 5th percentile of [1..10] is 1.45 under linear interpolation.
        assert_relative_eq!(var.var, 100.0 - 1.45, epsilon = 1e-9);
    }

    #[test]
    fn test_single_path_degenerate_distribution() {
        // Percentile of a one-element distribution is that element.
        let result = result_with_terminals(&[97.5], 100.0);
        let var = var_95(&result).unwrap();
        assert_relative_eq!(var.var, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_distribution_rejected() {
        let result = SimulationResult::new(Array2::zeros((0, 2)), 100.0, 0.02);
        assert_eq!(var_95(&result).unwrap_err(), AnalyticsError::EmptyDistribution);
    }

    #[test]
    fn test_confidence_level_bounds() {
        let result = result_with_terminals(&[99.0, 101.0], 100.0);
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = monte_carlo_var(&result, bad).unwrap_err();
            assert!(matches!(err, AnalyticsError::InvalidParameter { .. }));
        }
        monte_carlo_var(&result, 0.99).unwrap();
    }

    #[test]
    fn test_display_formats_dollars_two_decimals() {
        let var = VaRResult {
            var: 4.8703,
            confidence_level: 0.95,
            horizon_days: 30,
            method: VaRMethod::MonteCarlo,
        };
        assert_eq!(var.to_string(), "VaR(95%, 30d): $4.87");

        let no_downside = VaRResult {
            var: -1.2,
            confidence_level: 0.95,
            horizon_days: 60,
            method: VaRMethod::MonteCarlo,
        };
        assert_eq!(no_downside.to_string(), "VaR(95%, 60d): $-1.20");
    }

    #[test]
    fn test_estimator_ignores_intermediate_steps() {
        let paths = array![[500.0, 95.0], [2.0, 98.0], [700.0, 99.0]];
        let result = SimulationResult::new(paths, 100.0, 0.02);
        let var = var_95(&result).unwrap();
        // Only the last column matters.
        assert_relative_eq!(var.var, 100.0 - 95.3, epsilon = 1e-9);
    }
}
