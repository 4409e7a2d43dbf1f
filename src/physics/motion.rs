/// Gravity used by the vertical model, m/s^2.
pub const GRAVITY: f64 = 9.81;

/// Thrust at a given throttle, grams.
pub fn current_thrust(throttle_pct: f64, total_thrust_grams: f64) -> f64 {
    (throttle_pct / 100.0) * total_thrust_grams
}

/// Net vertical acceleration (m/s^2): (TWR at this throttle - 1) * g.
pub fn vertical_acceleration(throttle_pct: f64, total_thrust_grams: f64, weight_grams: f64) -> f64 {
    let thrust = current_thrust(throttle_pct, total_thrust_grams);
    ((thrust - weight_grams) / weight_grams) * GRAVITY
}
