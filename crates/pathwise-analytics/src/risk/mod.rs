//! Tail-risk estimation over simulated terminal prices.
//!
//! Value at Risk (VaR) here is the dollar distance between the observed
//! last close and a lower quantile of the simulated terminal-price
//! distribution: at 95% confidence, 95% of simulated outcomes end better
//! than `last_price − VaR`.
//!
//! A negative VaR is a legitimate outcome, not an error: it means even the
//! tail quantile of simulated prices sits above the current price ("no
//! downside at this confidence level").

mod var;

pub use var::{monte_carlo_var, var_95, VaRMethod, VaRResult, DEFAULT_CONFIDENCE_LEVEL};
