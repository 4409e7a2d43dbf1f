use tracing::info;

use crate::control::{AltitudeHold, Pilot};
use crate::error::Result;
use crate::hardware::HardwareConfig;
use super::simulator::Simulator;
use super::state::{SimConfig, Tick};

// ---------------------------------------------------------------------------
// Headless flight: pilot presses + fixed steps until max_time
// ---------------------------------------------------------------------------

/// Fly a build with a custom pilot. Returns one tick per step, preceded by
/// the parked state at t = 0.
pub fn fly_with(
    hardware: HardwareConfig,
    config: &SimConfig,
    pilot: &mut dyn Pilot,
) -> Result<Vec<Tick>> {
    let mut sim = Simulator::new(*config)?;
    sim.start(hardware)?;
    pilot.reset();
    info!("Pilot: {}", pilot.name());

    let steps = (config.max_time / config.dt).round() as usize;
    let mut ticks = Vec::with_capacity(steps.min(200_000) + 1);
    ticks.push(Tick {
        time: 0.0,
        throttle_pct: 0.0,
        acceleration_m_s2: 0.0,
        velocity_m_s: 0.0,
        altitude_m: 0.0,
        grounded: true,
    });

    for _ in 0..steps {
        if let Some(cmd) = sim.state().and_then(|s| pilot.command(s, config.dt)) {
            sim.press(cmd);
        }
        match sim.step() {
            Some(tick) => ticks.push(tick),
            None => break,
        }
    }

    sim.stop();
    Ok(ticks)
}

/// Fly with the altitude-hold pilot (convenience wrapper).
pub fn fly(hardware: HardwareConfig, config: &SimConfig, target_m: f64) -> Result<Vec<Tick>> {
    let mut pilot = AltitudeHold::new(target_m, config.throttle_step);
    fly_with(hardware, config, &mut pilot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ScriptedPilot;
    use crate::hardware::presets;
    use crate::sim::input::ThrottleCommand;

    #[test]
    fn altitude_hold_settles_near_target() {
        let config = SimConfig { max_time: 30.0, ..SimConfig::default() };
        let ticks = fly(presets::freestyle_4s(), &config, 5.0).unwrap();
        let last = ticks.last().unwrap();
        assert!((last.altitude_m - 5.0).abs() < 1.0, "ended at {:.2} m", last.altitude_m);
        let peak = ticks.iter().map(|t| t.altitude_m).fold(0.0_f64, f64::max);
        assert!(peak < 7.0, "overshoot to {:.2} m", peak);
    }

    #[test]
    fn altitude_never_negative() {
        let dt = SimConfig::DT;
        let mut pilot = ScriptedPilot::default()
            .burst(0.0, ThrottleCommand::Increase, 10, dt)
            .burst(1.0, ThrottleCommand::Decrease, 10, dt);
        let config = SimConfig { max_time: 10.0, ..SimConfig::default() };
        let ticks = fly_with(presets::studio_default(), &config, &mut pilot).unwrap();
        assert!(ticks.iter().all(|t| t.altitude_m >= 0.0));
        assert!(ticks.iter().any(|t| t.altitude_m > 1.0));
        let last = ticks.last().unwrap();
        assert_eq!((last.altitude_m, last.velocity_m_s), (0.0, 0.0));
    }

    #[test]
    fn zero_step_refused_before_flying() {
        let config = SimConfig { dt: 0.0, ..SimConfig::default() };
        let err = fly(presets::studio_default(), &config, 5.0).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidSimConfig { .. }));
    }

    #[test]
    fn reused_pilot_replays_script() {
        let dt = SimConfig::DT;
        let mut pilot = ScriptedPilot::default().burst(0.0, ThrottleCommand::Increase, 10, dt);
        let config = SimConfig { max_time: 1.0, ..SimConfig::default() };
        let first = fly_with(presets::studio_default(), &config, &mut pilot).unwrap();
        let second = fly_with(presets::studio_default(), &config, &mut pilot).unwrap();
        assert_eq!(first.last().unwrap().throttle_pct, 20.0);
        assert_eq!(first, second);
    }

    #[test]
    fn underpowered_build_never_leaves_ground() {
        let dt = SimConfig::DT;
        let mut pilot = ScriptedPilot::default().burst(0.0, ThrottleCommand::Increase, 50, dt);
        let config = SimConfig { max_time: 5.0, ..SimConfig::default() };
        let ticks = fly_with(presets::brick(), &config, &mut pilot).unwrap();
        assert_eq!(ticks.len(), (5.0 / dt).round() as usize + 1);
        assert!(ticks.iter().all(|t| t.altitude_m == 0.0));
        assert_eq!(ticks.last().unwrap().throttle_pct, 100.0);
    }
}
