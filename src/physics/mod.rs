pub mod motion;
pub mod thrust;

pub use motion::{vertical_acceleration, GRAVITY};
pub use thrust::{compute, FlightStats};
