//! Top-level simulation configuration.

use crate::{SimError, SimResult};

/// How many recharge stations a fully initialized scenario carries.
///
/// The battery wrapper's routing guard compares the live roster against
/// this count before searching for a charging target.
pub const EXPECTED_STATIONS: usize = 8;

/// Run parameters, typically loaded from a scenario file by the application
/// crate and passed to [`SimulationModel::new`][crate::SimulationModel::new].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SimConfig {
    /// Simulated time-units per tick.
    pub dt: f64,

    /// Total ticks to simulate in [`run`][crate::SimulationModel::run].
    pub total_ticks: u64,

    /// Station-roster size the routing guard expects.
    pub expected_stations: usize,
}

impl SimConfig {
    pub fn new(dt: f64, total_ticks: u64) -> Self {
        Self {
            dt,
            total_ticks,
            expected_stations: EXPECTED_STATIONS,
        }
    }

    /// Reject configurations the driver cannot run meaningfully.
    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::Config(format!("dt must be positive, got {}", self.dt)));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(1.0, 0)
    }
}
