//! Property-based tests for simulation and VaR invariants.
//!
//! These verify properties that should hold for arbitrary valid inputs:
//! - The result shape always matches the requested parameters
//! - Seeding is deterministic
//! - VaR never cuts outside the terminal distribution's range

use ndarray::Array2;
use proptest::prelude::*;

use pathwise_analytics::prelude::*;
use pathwise_core::prelude::*;

fn arb_prices() -> impl Strategy<Value = PriceSeries> {
    // Positive closes with moves up to roughly ±5% per day.
    prop::collection::vec(0.95f64..1.05, 3..40).prop_map(|factors| {
        let mut close = 100.0;
        let mut closes = Vec::with_capacity(factors.len());
        for f in factors {
            close *= f;
            closes.push(close);
        }
        PriceSeries::new(closes).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shape_matches_params(
        prices in arb_prices(),
        n in 1usize..64,
        d in 1usize..32,
        seed in any::<u64>(),
    ) {
        let params = SimulationParams::new(n, d).with_seed(seed);
        let result = simulate(&prices, &params).unwrap();
        prop_assert_eq!(result.num_paths(), n);
        prop_assert_eq!(result.horizon_days(), d);
        prop_assert_eq!(result.terminal_prices().len(), n);
    }

    #[test]
    fn prop_seeding_is_deterministic(
        prices in arb_prices(),
        seed in any::<u64>(),
    ) {
        let params = SimulationParams::new(16, 8).with_seed(seed);
        let a = simulate(&prices, &params).unwrap();
        let b = simulate(&prices, &params).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_var_cut_stays_within_terminal_range(
        terminals in prop::collection::vec(1.0f64..1000.0, 1..200),
        last_price in 1.0f64..1000.0,
    ) {
        let n = terminals.len();
        let mut paths = Array2::zeros((n, 1));
        for (i, &t) in terminals.iter().enumerate() {
            paths[[i, 0]] = t;
        }
        let result = SimulationResult::new(paths, last_price, 0.02);

        let var = var_95(&result).unwrap();
        let min = terminals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = terminals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // last_price - var is the interpolated tail quantile.
        let cut = last_price - var.var;
        prop_assert!(cut >= min - 1e-9 && cut <= max + 1e-9);
    }

    #[test]
    fn prop_higher_confidence_never_lowers_var(
        terminals in prop::collection::vec(1.0f64..1000.0, 2..200),
    ) {
        let n = terminals.len();
        let mut paths = Array2::zeros((n, 1));
        for (i, &t) in terminals.iter().enumerate() {
            paths[[i, 0]] = t;
        }
        let result = SimulationResult::new(paths, 500.0, 0.02);

        // A deeper tail cut can only move the quantile down, so VaR is
        // non-decreasing in the confidence level.
        let var_90 = monte_carlo_var(&result, 0.90).unwrap();
        let var_99 = monte_carlo_var(&result, 0.99).unwrap();
        prop_assert!(var_99.var >= var_90.var - 1e-9);
    }
}
