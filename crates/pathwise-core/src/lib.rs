//! # Pathwise Core
//!
//! Core types and validation for the Pathwise Monte Carlo simulation library.
//!
//! This crate provides the foundational building blocks used throughout
//! Pathwise:
//!
//! - **`PriceSeries`**: a validated ordered series of daily closing prices
//! - **`ReturnSeries`**: daily percentage returns derived from a price series
//! - **`SimulationParams`**: the caller-chosen simulation shape (number of
//!   paths, horizon in days, optional seed)
//!
//! ## Design Philosophy
//!
//! - **Validate at the boundary**: prices and parameters are checked when
//!   constructed, so the simulation engine can assume well-formed inputs
//! - **Explicit over implicit**: reproducibility is a visible `seed` field,
//!   not hidden global state
//!
//! ## Example
//!
//! ```rust
//! use pathwise_core::prelude::*;
//!
//! let prices = PriceSeries::new(vec![100.0, 102.0, 101.0, 105.0, 103.0])?;
//! let returns = prices.returns()?;
//! assert_eq!(returns.len(), 4);
//! # Ok::<(), pathwise_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{
    PriceSeries, ReturnSeries, SimulationParams, DEFAULT_HORIZON_DAYS, DEFAULT_NUM_SIMULATIONS,
    HORIZON_CHOICES, SIMULATION_COUNT_CHOICES,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        PriceSeries, ReturnSeries, SimulationParams, DEFAULT_HORIZON_DAYS,
        DEFAULT_NUM_SIMULATIONS, HORIZON_CHOICES, SIMULATION_COUNT_CHOICES,
    };
}
