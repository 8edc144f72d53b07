//! Configuration management

mod settings;

pub use settings::{AppConfig, IngestConfig, SimulationConfig};
