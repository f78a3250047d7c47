use serde::{Deserialize, Serialize};

/// Largest value the simulation slider can produce
pub const MAX_PERCENT: u8 = 100;

/// Slider granularity in percentage points
pub const PERCENT_STEP: u8 = 10;

/// Hypothetical partial plastic removal to project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationIntent {
    /// Sent as `simulation_factor`; `1.0` at 0 % on the slider, `0.0` at 100 %
    pub fraction_removed: f64,
}

impl SimulationIntent {
    /// Derive the intent from a slider percentage.
    ///
    /// # Panics
    /// Panics if `percent > 100`. The slider is range constrained, so an
    /// out-of-range value is a caller bug.
    pub fn from_percent(percent: u8) -> Self {
        assert_percent(percent);
        Self { fraction_removed: f64::from(MAX_PERCENT - percent) / 100.0 }
    }
}

/// Fail fast on a slider value outside `[0, 100]`
pub fn assert_percent(percent: u8) {
    assert!(percent <= MAX_PERCENT, "simulation percent {} is outside [0, 100]", percent);
}
