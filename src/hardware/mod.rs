pub mod config;
pub mod table;

pub use config::{presets, HardwareConfig};
pub use table::SpecTable;
