//! Simulation parameters chosen by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Simulation counts offered by the dashboard selector.
pub const SIMULATION_COUNT_CHOICES: [usize; 3] = [200, 500, 1000];

/// Horizons (in trading days) offered by the dashboard selector.
pub const HORIZON_CHOICES: [usize; 3] = [30, 60, 90];

/// Default number of simulated paths.
pub const DEFAULT_NUM_SIMULATIONS: usize = 1000;

/// Default horizon in trading days.
pub const DEFAULT_HORIZON_DAYS: usize = 30;

/// Shape and reproducibility settings for one simulation run.
///
/// The selector constants ([`SIMULATION_COUNT_CHOICES`], [`HORIZON_CHOICES`])
/// are what the dashboard offers, but any positive values are accepted.
///
/// # Example
///
/// ```rust
/// use pathwise_core::SimulationParams;
///
/// let params = SimulationParams::new(500, 60).with_seed(42);
/// params.validate()?;
/// # Ok::<(), pathwise_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of independent paths to generate.
    pub num_simulations: usize,
    /// Length of each path in trading days.
    pub horizon_days: usize,
    /// Seed for reproducible runs (`None` = seeded from entropy).
    pub seed: Option<u64>,
}

impl SimulationParams {
    /// Creates parameters for an unseeded (non-reproducible) run.
    #[must_use]
    pub fn new(num_simulations: usize, horizon_days: usize) -> Self {
        Self {
            num_simulations,
            horizon_days,
            seed: None,
        }
    }

    /// Sets the seed for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that both shape parameters are at least 1.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` naming the offending field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_simulations == 0 {
            return Err(CoreError::invalid_parameter(
                "num_simulations",
                "must be at least 1",
            ));
        }
        if self.horizon_days == 0 {
            return Err(CoreError::invalid_parameter(
                "horizon_days",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_SIMULATIONS, DEFAULT_HORIZON_DAYS)
    }
}
