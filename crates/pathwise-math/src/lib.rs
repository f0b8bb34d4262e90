//! # Pathwise Math
//!
//! Numerical utilities for the Pathwise Monte Carlo simulation library.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, sample variance, sample standard
//!   deviation (N−1 denominator)
//! - **Quantiles**: percentile with linear interpolation between closest
//!   ranks
//!
//! ## Design Philosophy
//!
//! - **One convention, stated**: downstream Value-at-Risk numbers are
//!   sensitive to the variance denominator and the percentile interpolation
//!   scheme, so each function documents exactly which definition it uses
//! - **Numerical Stability**: careful handling of degenerate inputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod statistics;

pub use error::{MathError, MathResult};
pub use statistics::{mean, percentile, sample_std_dev, sample_variance};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::statistics::{mean, percentile, sample_std_dev, sample_variance};
}
