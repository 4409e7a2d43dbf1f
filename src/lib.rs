pub mod control;
pub mod error;
pub mod hardware;
pub mod io;
pub mod physics;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use hardware::{HardwareConfig, SpecTable};
pub use physics::{compute, FlightStats};
pub use settings::Settings;
pub use sim::{SimConfig, SimulationState, Simulator, ThrottleCommand, Tick};

/// Install the `tracing` subscriber used by the binaries.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }
}
