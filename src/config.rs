use serde::{Deserialize, Serialize};

/// hard bound on simulated months (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// months after which a run is declared non-converging
    pub max_months: u32,
}

impl SimulationConfig {
    pub fn new(max_months: u32) -> Self {
        Self { max_months }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}
