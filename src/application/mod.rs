mod config;
mod simulation;
pub mod host;

pub use config::{DEFAULT_RESOLUTION, Seeding, SimulationConfig};
pub use simulation::Simulation;
