// ---------------------------------------------------------------------------
// Explicit Euler step with a ground floor at altitude zero
// ---------------------------------------------------------------------------

/// Outcome of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrated {
    pub velocity: f64,
    pub altitude: f64,
    pub grounded: bool,
}

/// Velocity first, then altitude from the new velocity.
pub fn euler_step(velocity: f64, altitude: f64, acceleration: f64, dt: f64) -> (f64, f64) {
    let velocity = velocity + acceleration * dt;
    let altitude = altitude + velocity * dt;
    (velocity, altitude)
}

/// Euler step followed by the inelastic floor: any non-positive altitude is
/// pinned to zero with zero velocity in the same step. No sub-stepping to
/// the exact crossing time.
pub fn step_vertical(velocity: f64, altitude: f64, acceleration: f64, dt: f64) -> Integrated {
    let (velocity, altitude) = euler_step(velocity, altitude, acceleration, dt);
    if altitude <= 0.0 {
        Integrated { velocity: 0.0, altitude: 0.0, grounded: true }
    } else {
        Integrated { velocity, altitude, grounded: false }
    }
}
