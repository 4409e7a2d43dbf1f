pub mod pid;
pub mod pilot;

pub use pid::Pid;
pub use pilot::{AltitudeHold, Pilot, ScriptedPilot};
