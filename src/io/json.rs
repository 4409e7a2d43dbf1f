use std::io::{self, Write};
use std::path::Path;

use crate::hardware::HardwareConfig;
use crate::physics::FlightStats;
use crate::sim::{detect_events, EventKind, Tick};

/// Summary statistics computed from recorded telemetry.
#[derive(Debug, Clone, Default)]
pub struct FlightSummary {
    pub peak_altitude_m: f64,
    pub peak_time: f64,
    pub max_climb_m_s: f64,
    pub max_descent_m_s: f64,
    pub airborne_time: f64,
    pub flight_time: f64,
    pub touchdowns: usize,
}

impl FlightSummary {
    pub fn from_ticks(ticks: &[Tick]) -> Self {
        let Some(last) = ticks.last() else {
            return Self::default();
        };

        let peak = ticks
            .iter()
            .max_by(|a, b| a.altitude_m.total_cmp(&b.altitude_m))
            .unwrap_or(last);

        let max_climb = ticks.iter().map(|t| t.velocity_m_s).fold(0.0_f64, f64::max);
        let max_descent = ticks.iter().map(|t| -t.velocity_m_s).fold(0.0_f64, f64::max);

        let airborne_time = ticks
            .windows(2)
            .filter(|w| w[1].altitude_m > 0.0)
            .map(|w| w[1].time - w[0].time)
            .sum::<f64>();

        let touchdowns = detect_events(ticks)
            .iter()
            .filter(|e| e.kind == EventKind::Touchdown)
            .count();

        FlightSummary {
            peak_altitude_m: peak.altitude_m,
            peak_time: peak.time,
            max_climb_m_s: max_climb,
            max_descent_m_s: max_descent,
            airborne_time,
            flight_time: last.time,
            touchdowns,
        }
    }
}

/// Write hardware, computed stats and (optionally) a flight summary as JSON.
pub fn write_report<W: Write>(
    writer: &mut W,
    hardware: &HardwareConfig,
    stats: &FlightStats,
    summary: Option<&FlightSummary>,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"hardware\": {{")?;
    writeln!(writer, "    \"motor_kv\": {},", hardware.motor_kv)?;
    writeln!(writer, "    \"battery_cells\": {},", hardware.battery_cells)?;
    writeln!(writer, "    \"weight_grams\": {},", hardware.weight_grams)?;
    writeln!(writer, "    \"prop_diameter_inches\": {},", hardware.prop_diameter_inches)?;
    writeln!(writer, "    \"prop_pitch_inches\": {}", hardware.prop_pitch_inches)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"stats\": {{")?;
    writeln!(writer, "    \"voltage\": {:.1},", stats.voltage)?;
    writeln!(writer, "    \"motor_rpm\": {},", stats.motor_rpm)?;
    writeln!(writer, "    \"total_thrust_grams\": {:.2},", stats.total_thrust_grams)?;
    writeln!(writer, "    \"twr\": {:.2},", stats.twr)?;
    writeln!(writer, "    \"hover_throttle_pct\": {:.1}", stats.hover_throttle_pct)?;
    match summary {
        None => writeln!(writer, "  }}")?,
        Some(s) => {
            writeln!(writer, "  }},")?;
            writeln!(writer, "  \"flight\": {{")?;
            writeln!(writer, "    \"peak_altitude_m\": {:.2},", s.peak_altitude_m)?;
            writeln!(writer, "    \"peak_time_s\": {:.3},", s.peak_time)?;
            writeln!(writer, "    \"max_climb_m_s\": {:.2},", s.max_climb_m_s)?;
            writeln!(writer, "    \"max_descent_m_s\": {:.2},", s.max_descent_m_s)?;
            writeln!(writer, "    \"airborne_time_s\": {:.3},", s.airborne_time)?;
            writeln!(writer, "    \"flight_time_s\": {:.3},", s.flight_time)?;
            writeln!(writer, "    \"touchdowns\": {}", s.touchdowns)?;
            writeln!(writer, "  }}")?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}

pub fn write_report_file(
    path: impl AsRef<Path>,
    hardware: &HardwareConfig,
    stats: &FlightStats,
    summary: Option<&FlightSummary>,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, hardware, stats, summary)
}
