use nalgebra::Vector3;
use serde::Deserialize;

use crate::error::{ConfigProblem, Error, Problem, Result};
use crate::hardware::HardwareConfig;

// ---------------------------------------------------------------------------
// Simulation state: one vertical-flight run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub time: f64,              // s since start
    pub throttle_pct: f64,      // [0, 100]
    pub altitude_m: f64,        // >= 0
    pub velocity_m_s: f64,      // positive = climbing
    pub config: HardwareConfig, // fixed for the run
}

impl SimulationState {
    pub fn new(config: HardwareConfig) -> Self {
        Self {
            time: 0.0,
            throttle_pct: 0.0,
            altitude_m: 0.0,
            velocity_m_s: 0.0,
            config,
        }
    }

    /// Render position: the drone only moves along Z.
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, self.altitude_m)
    }

    pub fn on_ground(&self) -> bool {
        self.altitude_m <= 0.0
    }
}

// ---------------------------------------------------------------------------
// Per-step output
// ---------------------------------------------------------------------------

/// Snapshot emitted after every step for the HUD / telemetry sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub time: f64,
    pub throttle_pct: f64,
    pub acceleration_m_s2: f64,
    pub velocity_m_s: f64,
    pub altitude_m: f64,
    pub grounded: bool,         // floor clamp applied this step
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub dt: f64,            // s, fixed step (16 ms cadence)
    pub throttle_step: f64, // percentage points per key press
    pub max_time: f64,      // s, headless runs only
}

impl SimConfig {
    pub const DT: f64 = 0.016;
    pub const THROTTLE_STEP: f64 = 2.0;

    /// Requires a finite positive `dt` and `throttle_step`, and a finite
    /// non-negative `max_time`.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        for (name, value) in [("dt", self.dt), ("throttle_step", self.throttle_step)] {
            if !(value > 0.0 && value.is_finite()) {
                problems.push(ConfigProblem::new(name, Problem::NotPositive(value)));
            }
        }
        if !(self.max_time >= 0.0 && self.max_time.is_finite()) {
            problems.push(ConfigProblem::new("max_time", Problem::Negative(self.max_time)));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidSimConfig { problems })
        }
    }

    /// Host timer period matching `dt`.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.dt)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: Self::DT,
            throttle_step: Self::THROTTLE_STEP,
            max_time: 60.0,
        }
    }
}
