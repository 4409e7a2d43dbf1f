use tracing::{debug, info, warn};

use super::input::{apply_throttle, ThrottleCommand};
use super::integrator::step_vertical;
use super::state::{SimConfig, SimulationState, Tick};
use crate::error::Result;
use crate::hardware::HardwareConfig;
use crate::physics::thrust::{self, FlightStats};
use crate::physics::vertical_acceleration;

// ---------------------------------------------------------------------------
// Fixed-step vertical flight simulator
// ---------------------------------------------------------------------------

/// Owns at most one running simulation. The host's timer calls `step` once
/// per `SimConfig::dt`; input handlers call `adjust_throttle` / `press` from
/// the same thread.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
    state: Option<SimulationState>,
}

impl Simulator {
    /// Rejects a non-positive or non-finite step, key step or run length.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, state: None })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Begin a run from the ground with zero throttle.
    /// Replaces any run already in progress.
    pub fn start(&mut self, hardware: HardwareConfig) -> Result<FlightStats> {
        let stats = match thrust::compute(&hardware) {
            Ok(stats) => stats,
            Err(e) => {
                warn!("Simulation not started: {}", e);
                return Err(e);
            }
        };
        info!(
            "Simulation started: {}KV {}S {}g {}x{} (thrust {:.2} g, hover {:.1}%)",
            hardware.motor_kv,
            hardware.battery_cells,
            hardware.weight_grams,
            hardware.prop_diameter_inches,
            hardware.prop_pitch_inches,
            stats.total_thrust_grams,
            stats.hover_throttle_pct,
        );
        self.state = Some(SimulationState::new(hardware));
        Ok(stats)
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    /// Stats of the active build, recomputed from its config.
    pub fn flight_stats(&self) -> Option<FlightStats> {
        self.state.as_ref().map(|s| thrust::compute_validated(&s.config))
    }

    /// Add `delta_pct` to the throttle, clamped to [0, 100].
    /// Returns the new throttle, or `None` if nothing is running.
    pub fn adjust_throttle(&mut self, delta_pct: f64) -> Option<f64> {
        let state = self.state.as_mut()?;
        let before = state.throttle_pct;
        state.throttle_pct = apply_throttle(before, delta_pct);
        debug!("Throttle {:.1}% -> {:.1}%", before, state.throttle_pct);
        Some(state.throttle_pct)
    }

    /// One discrete key press worth of throttle change.
    pub fn press(&mut self, command: ThrottleCommand) -> Option<f64> {
        self.adjust_throttle(command.delta(self.config.throttle_step))
    }

    /// Advance one fixed step. Returns `None` when no run is active.
    pub fn step(&mut self) -> Option<Tick> {
        let dt = self.config.dt;
        let state = self.state.as_mut()?;

        // Recomputed every step; config is fixed for the run so this is
        // identical to the stats returned by `start`.
        let stats = thrust::compute_validated(&state.config);
        let acceleration = vertical_acceleration(
            state.throttle_pct,
            stats.total_thrust_grams,
            state.config.weight_grams,
        );

        let was_airborne = !state.on_ground();
        let out = step_vertical(state.velocity_m_s, state.altitude_m, acceleration, dt);
        state.velocity_m_s = out.velocity;
        state.altitude_m = out.altitude;
        state.time += dt;

        if was_airborne && out.grounded {
            debug!("Touchdown at t={:.3}s", state.time);
        }

        Some(Tick {
            time: state.time,
            throttle_pct: state.throttle_pct,
            acceleration_m_s2: acceleration,
            velocity_m_s: state.velocity_m_s,
            altitude_m: state.altitude_m,
            grounded: out.grounded,
        })
    }

    /// Halt stepping. The final state is handed back to the caller.
    pub fn stop(&mut self) -> Option<SimulationState> {
        let state = self.state.take();
        if let Some(s) = &state {
            info!("Simulation stopped at t={:.2}s, altitude {:.2}m", s.time, s.altitude_m);
        }
        state
    }

    /// Put the active run back on the ground at zero throttle, same build.
    pub fn reset(&mut self) {
        if let Some(state) = self.state.as_mut() {
            *state = SimulationState::new(state.config);
            info!("Simulation reset");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::presets;

    fn running() -> Simulator {
        let mut sim = Simulator::new(SimConfig::default()).unwrap();
        sim.start(presets::freestyle_4s()).unwrap();
        sim
    }

    #[test]
    fn first_step_at_zero_throttle_stays_on_ground() {
        let mut sim = running();
        let tick = sim.step().unwrap();
        assert_eq!(tick.acceleration_m_s2, -9.81);
        assert!(tick.grounded);
        assert_eq!(tick.altitude_m, 0.0);
        assert_eq!(tick.velocity_m_s, 0.0);
        assert_eq!(tick.throttle_pct, 0.0);
    }

    #[test]
    fn throttle_saturates_at_100() {
        let mut sim = running();
        for _ in 0..50 {
            sim.adjust_throttle(2.0);
        }
        assert_eq!(sim.state().unwrap().throttle_pct, 100.0);
        assert_eq!(sim.press(ThrottleCommand::Increase), Some(100.0));
        for _ in 0..80 {
            sim.press(ThrottleCommand::Decrease);
        }
        assert_eq!(sim.state().unwrap().throttle_pct, 0.0);
    }

    #[test]
    fn climbs_above_hover_throttle() {
        let mut sim = running();
        // hover is ~19.9% on this build
        for _ in 0..20 {
            sim.press(ThrottleCommand::Increase);
        }
        let mut last = None;
        for _ in 0..60 {
            last = sim.step();
        }
        let tick = last.unwrap();
        assert!(tick.altitude_m > 0.0);
        assert!(tick.velocity_m_s > 0.0);
        assert!(!tick.grounded);
        assert!((tick.time - 60.0 * 0.016).abs() < 1e-9);
    }

    #[test]
    fn cutting_throttle_lands_and_stops() {
        let mut sim = running();
        sim.adjust_throttle(60.0);
        for _ in 0..120 {
            sim.step();
        }
        sim.adjust_throttle(-100.0);
        let mut landed = false;
        for _ in 0..2000 {
            let tick = sim.step().unwrap();
            assert!(tick.altitude_m >= 0.0);
            if tick.grounded {
                assert_eq!(tick.velocity_m_s, 0.0);
                landed = true;
                break;
            }
        }
        assert!(landed);
    }

    #[test]
    fn recomputed_stats_match_start() {
        let mut sim = Simulator::default();
        let at_start = sim.start(presets::studio_default()).unwrap();
        sim.adjust_throttle(30.0);
        for _ in 0..10 {
            sim.step();
        }
        assert_eq!(sim.flight_stats(), Some(at_start));
    }

    #[test]
    fn invalid_build_not_started() {
        let mut sim = Simulator::default();
        let bad = HardwareConfig { battery_cells: 0, ..presets::studio_default() };
        assert!(sim.start(bad).is_err());
        assert!(!sim.is_running());
        assert!(sim.step().is_none());
        assert!(sim.adjust_throttle(2.0).is_none());
    }

    #[test]
    fn bad_step_config_rejected() {
        for config in [
            SimConfig { dt: 0.0, ..SimConfig::default() },
            SimConfig { dt: -0.016, ..SimConfig::default() },
            SimConfig { throttle_step: -2.0, ..SimConfig::default() },
        ] {
            assert!(matches!(
                Simulator::new(config),
                Err(crate::Error::InvalidSimConfig { .. })
            ));
        }
    }

    #[test]
    fn stop_hands_back_state_and_halts() {
        let mut sim = running();
        sim.adjust_throttle(50.0);
        sim.step();
        let last = sim.stop().unwrap();
        assert_eq!(last.throttle_pct, 50.0);
        assert!(sim.step().is_none());
        assert!(sim.stop().is_none());
    }

    #[test]
    fn reset_returns_to_ground() {
        let mut sim = running();
        sim.adjust_throttle(80.0);
        for _ in 0..30 {
            sim.step();
        }
        sim.reset();
        let s = sim.state().unwrap();
        assert_eq!((s.time, s.throttle_pct, s.altitude_m, s.velocity_m_s), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(s.config, presets::freestyle_4s());
    }
}
