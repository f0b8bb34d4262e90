//! Monte Carlo price-path simulation.
//!
//! Calibrates a constant daily volatility from historical returns and
//! generates independent random-walk price paths anchored at the most
//! recent close:
//!
//! ```text
//! S[0]   = last_price × (1 + ε₀)
//! S[t]   = S[t−1]    × (1 + εₜ)      εₜ ~ Normal(0, σ)
//! ```
//!
//! where `σ` is the sample standard deviation (N−1 denominator) of daily
//! percentage returns. Draws are i.i.d. with no drift, no variance
//! reduction, and no cross-path dependency.
//!
//! ## Reproducibility
//!
//! The random source is an explicit [`rand::Rng`] parameter; the
//! convenience entry point [`simulate`] seeds it from
//! `SimulationParams::seed` when present, otherwise from thread-local
//! entropy. Identical seeds produce bit-identical results, including
//! across the sequential/`parallel` feature boundary: each path is
//! generated from its own substream, seeded in path order from the
//! caller's RNG.
//!
//! ## Non-positive prices
//!
//! The step distribution is unbounded, so a draw of `ε ≤ −1` would drive a
//! path to zero or below. At realistic daily volatilities (a few percent)
//! that is a > 30σ event and never observed in practice; no clamp is
//! applied and any such value would be carried through as-is.

mod random_walk;
mod result;

pub use random_walk::{simulate, simulate_paths, MIN_CALIBRATION_OBSERVATIONS};
pub use result::SimulationResult;
