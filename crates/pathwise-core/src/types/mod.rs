//! Domain types for price histories, return series, and simulation parameters.

mod params;
mod price_series;
mod return_series;

pub use params::{
    SimulationParams, DEFAULT_HORIZON_DAYS, DEFAULT_NUM_SIMULATIONS, HORIZON_CHOICES,
    SIMULATION_COUNT_CHOICES,
};
pub use price_series::PriceSeries;
pub use return_series::ReturnSeries;
