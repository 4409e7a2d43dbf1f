use crate::physics::thrust;
use crate::sim::input::ThrottleCommand;
use crate::sim::state::SimulationState;
use super::pid::Pid;

/// Source of throttle presses for a headless run.
///
/// Plays the part of the keyboard: at most one press per step.
pub trait Pilot {
    fn command(&mut self, state: &SimulationState, dt: f64) -> Option<ThrottleCommand>;

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "unnamed"
    }
}

// ---------------------------------------------------------------------------
// Scripted pilot: timed presses
// ---------------------------------------------------------------------------

/// Replays `(time, command)` presses in time order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPilot {
    script: Vec<(f64, ThrottleCommand)>,
    next: usize,
}

impl ScriptedPilot {
    pub fn new(mut script: Vec<(f64, ThrottleCommand)>) -> Self {
        script.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { script, next: 0 }
    }

    /// `presses` presses of `command`, one per step starting at `at`.
    pub fn burst(mut self, at: f64, command: ThrottleCommand, presses: usize, dt: f64) -> Self {
        for i in 0..presses {
            self.script.push((at + i as f64 * dt, command));
        }
        Self::new(self.script)
    }
}

impl Pilot for ScriptedPilot {
    fn command(&mut self, state: &SimulationState, _dt: f64) -> Option<ThrottleCommand> {
        let (at, cmd) = *self.script.get(self.next)?;
        if state.time + 1e-9 >= at {
            self.next += 1;
            Some(cmd)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.next = 0;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ---------------------------------------------------------------------------
// Altitude hold: PID around hover throttle, quantised to key presses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AltitudeHold {
    pub target_m: f64,
    pub throttle_step: f64,
    pid: Pid,
}

impl AltitudeHold {
    pub fn new(target_m: f64, throttle_step: f64) -> Self {
        Self {
            target_m,
            throttle_step,
            // Output in throttle percent per metre of error
            pid: Pid::new(2.0, 0.2, 2.5),
        }
    }
}

impl Pilot for AltitudeHold {
    fn command(&mut self, state: &SimulationState, dt: f64) -> Option<ThrottleCommand> {
        let hover = thrust::compute_validated(&state.config).hover_throttle_pct;
        let error = self.target_m - state.altitude_m;
        let desired = (hover + self.pid.update(error, dt)).clamp(0.0, 100.0);

        let half_step = self.throttle_step * 0.5;
        if desired > state.throttle_pct + half_step {
            Some(ThrottleCommand::Increase)
        } else if desired < state.throttle_pct - half_step {
            Some(ThrottleCommand::Decrease)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.pid.reset();
    }

    fn name(&self) -> &str {
        "altitude-hold"
    }
}
