use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::hardware::HardwareConfig;
use crate::sim::SimConfig;

/// On-disk settings: a `[hardware]` build and `[sim]` tuning, both optional.
///
/// ```toml
/// [hardware]
/// motor_kv = 2400
/// battery_cells = 4
///
/// [sim]
/// max_time = 20.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub hardware: HardwareConfig,
    pub sim: SimConfig,
}

impl Settings {
    pub const FILENAME: &'static str = "drone-sim.toml";

    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.hardware.validate()?;
        settings.sim.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_toml(&fs::read_to_string(path)?)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            info!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
