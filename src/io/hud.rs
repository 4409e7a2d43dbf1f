use crate::physics::FlightStats;

/// Heads-up line shown over the 3D view. Throttle is truncated to a whole
/// percent.
pub fn hud_text(throttle_pct: f64, altitude_m: f64) -> String {
    format!("Throttle: {}% | Altitude: {:.2}m", throttle_pct.trunc() as i64, altitude_m)
}

/// One-shot "sync" report for the telemetry panel, one line per stat.
pub fn stats_lines(stats: &FlightStats) -> Vec<String> {
    vec![
        format!("Total Thrust (g): {:.2}", stats.total_thrust_grams),
        format!("TWR (Ratio): {:.2}", stats.twr),
        format!("Hover Throttle (%): {:.1}", stats.hover_throttle_pct),
        format!("Voltage (V): {:.1}", stats.voltage),
        format!("Motor RPM: {}", stats.motor_rpm),
    ]
}
