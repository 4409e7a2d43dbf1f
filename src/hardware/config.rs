use serde::Deserialize;

use crate::error::{ConfigProblem, Error, Problem, Result};
use crate::physics::thrust::{motor_rpm, pack_voltage};

// ---------------------------------------------------------------------------
// Hardware configuration (one quadcopter build)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HardwareConfig {
    pub motor_kv: u32,              // RPM per volt
    pub battery_cells: u32,         // series cell count ("S" rating)
    pub weight_grams: f64,          // all-up weight, g
    pub prop_diameter_inches: f64,
    pub prop_pitch_inches: f64,
}

impl HardwareConfig {
    /// Check that every field is strictly positive and that the motor RPM
    /// fits the reported `u32`. All offending fields are reported at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.motor_kv == 0 {
            problems.push(ConfigProblem::new("motor_kv", Problem::NotPositive(0.0)));
        }
        if self.battery_cells == 0 {
            problems.push(ConfigProblem::new("battery_cells", Problem::NotPositive(0.0)));
        }
        let rpm = motor_rpm(self.motor_kv, pack_voltage(self.battery_cells));
        if rpm.round() > u32::MAX as f64 {
            problems.push(ConfigProblem::new("motor_kv", Problem::TooLarge(rpm)));
        }
        for (name, value) in [
            ("weight_grams", self.weight_grams),
            ("prop_diameter_inches", self.prop_diameter_inches),
            ("prop_pitch_inches", self.prop_pitch_inches),
        ] {
            // NaN fails the comparison and is rejected with the rest
            if !(value > 0.0 && value.is_finite()) {
                problems.push(ConfigProblem::new(name, Problem::NotPositive(value)));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid(problems))
        }
    }
}

impl Default for HardwareConfig {
    fn default() -> Self {
        presets::studio_default()
    }
}

// ---------------------------------------------------------------------------
// Preset builds
// ---------------------------------------------------------------------------

pub mod presets {
    use super::HardwareConfig;

    /// The studio's default table: 2306 2400KV motors, 6S, 650 g, 5x4.5 props.
    pub fn studio_default() -> HardwareConfig {
        HardwareConfig {
            motor_kv: 2400,
            battery_cells: 6,
            weight_grams: 650.0,
            prop_diameter_inches: 5.0,
            prop_pitch_inches: 4.5,
        }
    }

    /// Same frame on a 4S pack.
    pub fn freestyle_4s() -> HardwareConfig {
        HardwareConfig { battery_cells: 4, ..studio_default() }
    }

    /// 3-inch cinewhoop on 1404 motors.
    pub fn cinewhoop() -> HardwareConfig {
        HardwareConfig {
            motor_kv: 4500,
            battery_cells: 4,
            weight_grams: 280.0,
            prop_diameter_inches: 3.0,
            prop_pitch_inches: 3.0,
        }
    }

    /// Underpowered build: 1000 KV on 1S cannot lift 650 g.
    pub fn brick() -> HardwareConfig {
        HardwareConfig {
            motor_kv: 1000,
            battery_cells: 1,
            ..studio_default()
        }
    }

    pub fn by_name(name: &str) -> Option<HardwareConfig> {
        match name {
            "studio" | "default" => Some(studio_default()),
            "freestyle-4s" => Some(freestyle_4s()),
            "cinewhoop" => Some(cinewhoop()),
            "brick" => Some(brick()),
            _ => None,
        }
    }
}
