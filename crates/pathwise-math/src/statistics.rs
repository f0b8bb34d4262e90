//! Descriptive statistics and quantile estimation.
//!
//! The volatility calibration and the Value-at-Risk tail cut both live on
//! top of these functions, so the conventions matter:
//!
//! - Variance and standard deviation use the **unbiased sample estimator**
//!   (N−1 denominator).
//! - [`percentile`] uses **linear interpolation between closest ranks**
//!   (the NumPy default), so a single-element input returns that element.
//!
//! Changing either convention changes every downstream VaR figure.

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};

/// Computes the arithmetic mean.
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for empty input.
pub fn mean(data: &[f64]) -> MathResult<f64> {
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Computes the unbiased sample variance (N−1 denominator).
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for fewer than 2 observations;
/// the N−1 denominator is degenerate there.
pub fn sample_variance(data: &[f64]) -> MathResult<f64> {
    if data.len() < 2 {
        return Err(MathError::insufficient_data(2, data.len()));
    }
    let mu = mean(data)?;
    let sum_sq = data.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>();
    Ok(sum_sq / (data.len() - 1) as f64)
}

/// Computes the unbiased sample standard deviation (N−1 denominator).
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for fewer than 2 observations.
pub fn sample_std_dev(data: &[f64]) -> MathResult<f64> {
    Ok(sample_variance(data)?.sqrt())
}

/// Computes the `p`-th percentile with linear interpolation between
/// closest ranks.
///
/// The target rank is `p / 100 × (n − 1)`; a non-integer rank is resolved
/// by linear interpolation between the two surrounding order statistics.
/// Input does not need to be sorted. A single-element input returns that
/// element for any `p`.
///
/// # Arguments
///
/// * `data` - Observations, in any order
/// * `p` - Percentile in `[0, 100]`
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for empty input and
/// `MathError::InvalidInput` if `p` is outside `[0, 100]` or not finite.
pub fn percentile(data: &[f64], p: f64) -> MathResult<f64> {
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !p.is_finite() || !(0.0..=100.0).contains(&p) {
        return Err(MathError::invalid_input(format!(
            "percentile must be within [0, 100], got {p}"
        )));
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }
    let weight = rank - lower as f64;
    Ok(sorted[lower] + weight * (sorted[upper] - sorted[lower]))
}
