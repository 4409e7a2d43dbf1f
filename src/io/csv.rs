use std::io::{self, Write};
use std::path::Path;

use crate::sim::Tick;

/// Write flight telemetry in CSV format.
///
/// Columns: time, throttle_pct, accel_m_s2, velocity_m_s, altitude_m, grounded
pub fn write_telemetry<W: Write>(writer: &mut W, ticks: &[Tick]) -> io::Result<()> {
    writeln!(writer, "time,throttle_pct,accel_m_s2,velocity_m_s,altitude_m,grounded")?;

    for t in ticks {
        writeln!(
            writer,
            "{:.3},{:.1},{:.4},{:.5},{:.5},{}",
            t.time,
            t.throttle_pct,
            t.acceleration_m_s2,
            t.velocity_m_s,
            t.altitude_m,
            u8::from(t.grounded),
        )?;
    }

    Ok(())
}

pub fn write_telemetry_file(path: impl AsRef<Path>, ticks: &[Tick]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_telemetry(&mut file, ticks)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let ticks = vec![
            Tick {
                time: 0.016,
                throttle_pct: 0.0,
                acceleration_m_s2: -9.81,
                velocity_m_s: 0.0,
                altitude_m: 0.0,
                grounded: true,
            },
            Tick {
                time: 0.032,
                throttle_pct: 40.0,
                acceleration_m_s2: 9.93,
                velocity_m_s: 0.15888,
                altitude_m: 0.00254,
                grounded: false,
            },
        ];

        let mut buf = Vec::new();
        write_telemetry(&mut buf, &ticks).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert_eq!(lines[1], "0.016,0.0,-9.8100,0.00000,0.00000,1");
        assert!(lines[2].ends_with(",0"));
    }
}
