pub mod clock;
pub mod event;
pub mod input;
pub mod integrator;
pub mod runner;
pub mod simulator;
pub mod state;

pub use clock::FixedStepClock;
pub use event::{detect_events, detect_events_with, AltitudeDetector, EventKind, FlightEvent};
pub use input::ThrottleCommand;
pub use runner::{fly, fly_with};
pub use simulator::Simulator;
pub use state::{SimConfig, SimulationState, Tick};
