//! Random-walk path generation calibrated on historical volatility.

use log::debug;
use ndarray::{Array2, ArrayViewMut1, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use pathwise_core::{PriceSeries, SimulationParams};
use pathwise_math::sample_std_dev;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::simulation::SimulationResult;

/// Minimum price observations for a well-defined volatility calibration.
///
/// Two observations yield a single return, for which the N−1 sample
/// standard deviation is 0/0. Rather than propagate NaN through every
/// path, the run is rejected up front.
pub const MIN_CALIBRATION_OBSERVATIONS: usize = 3;

/// Runs a full simulation using the random source configured in `params`.
///
/// Seeded from `params.seed` when present (reproducible), otherwise from
/// thread-local entropy.
///
/// # Errors
///
/// Same contract as [`simulate_paths`].
pub fn simulate(
    prices: &PriceSeries,
    params: &SimulationParams,
) -> AnalyticsResult<SimulationResult> {
    match params.seed {
        Some(seed) => simulate_paths(prices, params, &mut StdRng::seed_from_u64(seed)),
        None => simulate_paths(prices, params, &mut rand::thread_rng()),
    }
}

/// Generates `params.num_simulations` independent price paths of
/// `params.horizon_days` steps each, drawing from `rng`.
///
/// Calibration and generation in one call: derives daily percentage
/// returns from `prices`, takes their sample standard deviation (N−1
/// denominator) as the constant step volatility, then walks each path
/// forward from the most recent close by i.i.d. `Normal(0, σ)` percentage
/// steps.
///
/// # Errors
///
/// - `InvalidParameter` if either shape parameter is zero; checked before
///   any computation, no partial results are produced
/// - `InsufficientHistory` if `prices` holds fewer than
///   [`MIN_CALIBRATION_OBSERVATIONS`] observations
pub fn simulate_paths<R: Rng>(
    prices: &PriceSeries,
    params: &SimulationParams,
    rng: &mut R,
) -> AnalyticsResult<SimulationResult> {
    params.validate()?;
    if prices.len() < MIN_CALIBRATION_OBSERVATIONS {
        return Err(AnalyticsError::InsufficientHistory {
            required: MIN_CALIBRATION_OBSERVATIONS,
            actual: prices.len(),
        });
    }

    let returns = prices.returns()?;
    let daily_volatility = sample_std_dev(returns.as_slice())?;
    let last_price = prices.last().ok_or(AnalyticsError::InsufficientHistory {
        required: MIN_CALIBRATION_OBSERVATIONS,
        actual: 0,
    })?;
    let step = Normal::new(0.0, daily_volatility)
        .map_err(|e| AnalyticsError::invalid_parameter("daily_volatility", e.to_string()))?;

    debug!(
        "simulating {} paths over {} days: last_price={:.4}, daily_vol={:.6}",
        params.num_simulations, params.horizon_days, last_price, daily_volatility
    );

    // One substream per path, seeded in path order from the caller's RNG.
    // The caller's entropy is consumed identically with and without the
    // `parallel` feature, so both builds produce identical matrices.
    let seeds: Vec<u64> = (0..params.num_simulations).map(|_| rng.gen()).collect();
    let mut paths = Array2::zeros((params.num_simulations, params.horizon_days));

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        paths
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .zip(seeds.par_iter())
            .for_each(|(row, &seed)| fill_path(row, seed, last_price, step));
    }

    #[cfg(not(feature = "parallel"))]
    for (row, &seed) in paths.axis_iter_mut(Axis(0)).zip(seeds.iter()) {
        fill_path(row, seed, last_price, step);
    }

    Ok(SimulationResult::new(paths, last_price, daily_volatility))
}

/// Walks one path forward from `last_price`, writing every step into `row`.
fn fill_path(mut row: ArrayViewMut1<'_, f64>, seed: u64, last_price: f64, step: Normal<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut prev = last_price;
    for cell in row.iter_mut() {
        prev *= 1.0 + step.sample(&mut rng);
        *cell = prev;
    }
}
