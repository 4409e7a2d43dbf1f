use tracing::info;

use super::config::HardwareConfig;
use crate::error::{ConfigProblem, Error, Problem, Result};

pub const MOTOR: &str = "Motor";
pub const ESC: &str = "ESC";
pub const BATTERY: &str = "Battery";
pub const WEIGHT: &str = "Weight";
pub const PROP_DIAMETER: &str = "Prop Diameter";
pub const PROP_PITCH: &str = "Prop Pitch";

// ---------------------------------------------------------------------------
// Parameter / Value table as the user edits it
// ---------------------------------------------------------------------------

/// Free-text hardware table. Values keep their unit suffixes ("6S", "650g")
/// until `to_config` parses them.
#[derive(Debug, Clone, Default)]
pub struct SpecTable {
    rows: Vec<(String, String)>,
}

impl SpecTable {
    pub fn new() -> Self {
        Self { rows: vec![] }
    }

    pub fn studio_default() -> Self {
        let mut table = Self::new();
        for (name, value) in [
            (MOTOR, "2306 2400KV"),
            (ESC, "45A"),
            (BATTERY, "6S"),
            (WEIGHT, "650g"),
            (PROP_DIAMETER, "5in"),
            (PROP_PITCH, "4.5in"),
        ] {
            table.rows.push((name.to_string(), value.to_string()));
        }
        table
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set (or add) a row. Returns the line written to the telemetry log.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> String {
        let value = value.into();
        let line = format!("Config Update: {} set to {}", name, value);
        match self.rows.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(row) => row.1 = value,
            None => self.rows.push((name.to_string(), value)),
        }
        info!("{}", line);
        line
    }

    /// Parse the table into a validated config. Every missing or
    /// malformed row is reported, not just the first.
    pub fn to_config(&self) -> Result<HardwareConfig> {
        let mut problems = Vec::new();

        let motor_kv = self.integer(MOTOR, &["kv"], &mut problems);
        let battery_cells = self.integer(BATTERY, &["s"], &mut problems);
        let weight_grams = self.real(WEIGHT, &["g"], &mut problems);
        let prop_diameter = self.real(PROP_DIAMETER, &["in", "\""], &mut problems);
        let prop_pitch = self.real(PROP_PITCH, &["in", "\""], &mut problems);

        match (motor_kv, battery_cells, weight_grams, prop_diameter, prop_pitch) {
            (Some(kv), Some(cells), Some(w), Some(d), Some(p)) if problems.is_empty() => {
                let config = HardwareConfig {
                    motor_kv: kv,
                    battery_cells: cells,
                    weight_grams: w,
                    prop_diameter_inches: d,
                    prop_pitch_inches: p,
                };
                config.validate()?;
                Ok(config)
            }
            _ => Err(Error::invalid(problems)),
        }
    }

    fn real(&self, name: &str, suffixes: &[&str], problems: &mut Vec<ConfigProblem>) -> Option<f64> {
        let Some(raw) = self.get(name) else {
            problems.push(ConfigProblem::new(name, Problem::Missing));
            return None;
        };
        match parse_quantity(raw, suffixes) {
            Ok(v) => Some(v),
            Err(problem) => {
                problems.push(ConfigProblem::new(name, problem));
                None
            }
        }
    }

    fn integer(&self, name: &str, suffixes: &[&str], problems: &mut Vec<ConfigProblem>) -> Option<u32> {
        let v = self.real(name, suffixes, problems)?;
        if v.fract() != 0.0 || v > u32::MAX as f64 {
            let raw = self.get(name).unwrap_or_default();
            problems.push(ConfigProblem::new(name, Problem::NotANumber(raw.to_string())));
            return None;
        }
        Some(v as u32)
    }
}

/// Parse a cell like "2306 2400KV", "6S" or "4.5in".
/// The last whitespace-separated token carries the value; a trailing unit
/// suffix (case-insensitive) is dropped.
pub fn parse_quantity(raw: &str, suffixes: &[&str]) -> std::result::Result<f64, Problem> {
    let token = raw.split_whitespace().last().unwrap_or("");
    if token.is_empty() {
        return Err(Problem::Missing);
    }

    let lower = token.to_ascii_lowercase();
    let number = suffixes
        .iter()
        .find_map(|s| lower.strip_suffix(*s))
        .unwrap_or(&lower);

    match number.parse::<f64>() {
        Ok(v) if !v.is_finite() => Err(Problem::NotANumber(raw.to_string())),
        Ok(v) if v <= 0.0 => Err(Problem::NotPositive(v)),
        Ok(v) => Ok(v),
        Err(_) => Err(Problem::NotANumber(raw.to_string())),
    }
}
