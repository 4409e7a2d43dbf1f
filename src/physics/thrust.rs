use crate::hardware::HardwareConfig;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Empirical constants
// ---------------------------------------------------------------------------

pub const LOADED_CELL_VOLTAGE: f64 = 3.8; // V per cell under load (3.7 nominal, 4.2 peak)
pub const MOTOR_EFFICIENCY: f64 = 0.80;
pub const MOTOR_COUNT: f64 = 4.0;

// Reference point of the scaling law: 5x4.5 prop at 25k RPM makes 600 g
pub const BASE_RPM_K: f64 = 25.0;
pub const BASE_DIAMETER: f64 = 5.0;
pub const BASE_PITCH: f64 = 4.5;
pub const BASE_THRUST: f64 = 600.0;

// ---------------------------------------------------------------------------
// Flight statistics
// ---------------------------------------------------------------------------

/// Derived performance numbers, rounded to display precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightStats {
    pub voltage: f64,             // V, 1 decimal
    pub motor_rpm: u32,
    pub total_thrust_grams: f64,  // 2 decimals
    pub twr: f64,                 // 2 decimals
    pub hover_throttle_pct: f64,  // 1 decimal
}

/// Loaded pack voltage.
pub fn pack_voltage(cells: u32) -> f64 {
    cells as f64 * LOADED_CELL_VOLTAGE
}

/// Theoretical motor RPM after efficiency losses.
pub fn motor_rpm(kv: u32, voltage: f64) -> f64 {
    kv as f64 * voltage * MOTOR_EFFICIENCY
}

/// Combined static thrust of all four motors, grams (unrounded).
///
/// T ~ RPM^2 * D^3 * P, anchored at the 5x4.5 / 25k RPM / 600 g baseline.
pub fn total_thrust(rpm: f64, diameter: f64, pitch: f64) -> f64 {
    let rpm_k = rpm / 1000.0;
    let thrust_factor = (rpm_k / BASE_RPM_K).powi(2)
        * (diameter / BASE_DIAMETER).powi(3)
        * (pitch / BASE_PITCH);
    BASE_THRUST * thrust_factor * MOTOR_COUNT
}

/// Compute flight statistics for a build. Rejects non-positive fields.
pub fn compute(config: &HardwareConfig) -> Result<FlightStats> {
    config.validate()?;
    Ok(compute_validated(config))
}

/// Same as `compute` for a config already known to be valid.
pub(crate) fn compute_validated(config: &HardwareConfig) -> FlightStats {
    let voltage = pack_voltage(config.battery_cells);
    let rpm = motor_rpm(config.motor_kv, voltage);
    let thrust = total_thrust(rpm, config.prop_diameter_inches, config.prop_pitch_inches);
    let weight = config.weight_grams;

    let twr = thrust / weight;
    let hover = if thrust > weight { weight / thrust * 100.0 } else { 100.0 };

    FlightStats {
        voltage: round_to(voltage, 1),
        // validate() bounds this within u32
        motor_rpm: rpm.round() as u32,
        total_thrust_grams: round_to(thrust, 2),
        twr: round_to(twr, 2),
        hover_throttle_pct: round_to(hover, 1),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::presets;

    fn freestyle_4s() -> HardwareConfig {
        HardwareConfig {
            motor_kv: 2400,
            battery_cells: 4,
            weight_grams: 650.0,
            prop_diameter_inches: 5.0,
            prop_pitch_inches: 4.5,
        }
    }

    #[test]
    fn reference_build_4s() {
        let s = compute(&freestyle_4s()).unwrap();
        assert_eq!(s.voltage, 15.2);
        assert_eq!(s.motor_rpm, 29184);
        assert_eq!(s.total_thrust_grams, 3270.55);
        assert_eq!(s.twr, 5.03);
        assert_eq!(s.hover_throttle_pct, 19.9);
    }

    #[test]
    fn baseline_prop_at_25k_makes_600g_per_motor() {
        let t = total_thrust(25_000.0, BASE_DIAMETER, BASE_PITCH);
        assert!((t - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn voltage_is_cells_times_loaded_voltage() {
        for cells in 1..=12 {
            let cfg = HardwareConfig { battery_cells: cells, ..freestyle_4s() };
            let s = compute(&cfg).unwrap();
            assert!((s.voltage - cells as f64 * 3.8).abs() < 1e-9, "{cells}S");
        }
    }

    #[test]
    fn doubling_diameter_gives_8x_thrust() {
        let small = compute(&freestyle_4s()).unwrap();
        let big = compute(&HardwareConfig { prop_diameter_inches: 10.0, ..freestyle_4s() }).unwrap();
        assert!((big.total_thrust_grams / small.total_thrust_grams - 8.0).abs() < 1e-4);
    }

    #[test]
    fn doubling_pitch_gives_2x_thrust() {
        let base = compute(&freestyle_4s()).unwrap();
        let steep = compute(&HardwareConfig { prop_pitch_inches: 9.0, ..freestyle_4s() }).unwrap();
        assert!((steep.total_thrust_grams / base.total_thrust_grams - 2.0).abs() < 1e-4);
    }

    #[test]
    fn underpowered_build_hovers_at_100() {
        let s = compute(&presets::brick()).unwrap();
        assert!(s.total_thrust_grams <= 650.0);
        assert_eq!(s.hover_throttle_pct, 100.0);
        assert!(s.twr < 1.0);
    }

    #[test]
    fn hover_throttle_in_range() {
        for name in ["studio", "freestyle-4s", "cinewhoop", "brick"] {
            let s = compute(&presets::by_name(name).unwrap()).unwrap();
            assert!((0.0..=100.0).contains(&s.hover_throttle_pct), "{name}");
        }
    }

    #[test]
    fn deterministic() {
        let cfg = presets::studio_default();
        assert_eq!(compute(&cfg).unwrap(), compute(&cfg).unwrap());
    }

    #[test]
    fn oversized_rpm_is_an_error_not_a_clamp() {
        let cfg = HardwareConfig { motor_kv: u32::MAX, battery_cells: 100, ..freestyle_4s() };
        let err = compute(&cfg).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig { .. }));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = HardwareConfig { weight_grams: 0.0, ..freestyle_4s() };
        assert!(compute(&cfg).is_err());
    }
}
