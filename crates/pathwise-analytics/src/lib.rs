//! # Pathwise Analytics
//!
//! Monte Carlo price-path simulation and Value-at-Risk estimation.
//!
//! Given a historical closing-price series, this crate calibrates a daily
//! volatility parameter, generates a configurable number of synthetic future
//! price paths under an independent-normal random-walk model, and derives a
//! tail-risk estimate from the distribution of terminal prices:
//!
//! - **Simulation**: return derivation, volatility calibration, and path
//!   generation ([`simulation`])
//! - **Risk**: terminal distribution extraction and Monte Carlo VaR
//!   ([`risk`])
//!
//! ## Model
//!
//! Each path starts from the most recent close and multiplies forward by
//! `(1 + ε)` per day, with `ε ~ Normal(0, σ)` and `σ` the sample standard
//! deviation of historical daily returns. Plain Monte Carlo: no drift term,
//! no variance reduction, no volatility clustering. Deliberate modeling
//! simplifications, not omissions.
//!
//! ## Example
//!
//! ```rust
//! use pathwise_analytics::prelude::*;
//! use pathwise_core::prelude::*;
//!
//! let prices = PriceSeries::new(vec![100.0, 102.0, 101.0, 105.0, 103.0])?;
//! let params = SimulationParams::new(1000, 30).with_seed(42);
//!
//! let result = simulate(&prices, &params)?;
//! assert_eq!(result.num_paths(), 1000);
//!
//! let var = var_95(&result)?;
//! println!("{var}"); // e.g. "VaR(95%, 30d): $4.87"
//! # Ok::<(), pathwise_analytics::AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod risk;
pub mod simulation;

pub use error::{AnalyticsError, AnalyticsResult};
pub use risk::{monte_carlo_var, var_95, VaRMethod, VaRResult, DEFAULT_CONFIDENCE_LEVEL};
pub use simulation::{
    simulate, simulate_paths, SimulationResult, MIN_CALIBRATION_OBSERVATIONS,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::risk::{
        monte_carlo_var, var_95, VaRMethod, VaRResult, DEFAULT_CONFIDENCE_LEVEL,
    };
    pub use crate::simulation::{
        simulate, simulate_paths, SimulationResult, MIN_CALIBRATION_OBSERVATIONS,
    };
}
