/// Discrete throttle input, e.g. one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleCommand {
    Increase,
    Decrease,
}

impl ThrottleCommand {
    /// Signed throttle change for one press.
    pub fn delta(self, step: f64) -> f64 {
        match self {
            ThrottleCommand::Increase => step,
            ThrottleCommand::Decrease => -step,
        }
    }
}

/// Apply a throttle change, clamped to [0, 100]. A NaN delta is ignored.
pub fn apply_throttle(throttle_pct: f64, delta_pct: f64) -> f64 {
    if delta_pct.is_nan() {
        return throttle_pct;
    }
    (throttle_pct + delta_pct).clamp(0.0, 100.0)
}
