//! sensor-fleet: A small fleet of heterogeneous sensors
//!
//! This library ties the workspace crates together:
//! - Ingest of `KIND:ID:VALUE` lines into a sensor registry
//! - A seeded simulator producing such lines
//! - Console reports and the interactive menu
//! - Configuration management

pub mod config;
pub mod ingest;
pub mod menu;
pub mod report;
pub mod simulator;

// Re-export commonly used types
pub use config::AppConfig;
pub use ingest::{parse_line, IngestError, IngestOutcome, IngestRecord, Ingestor};
pub use menu::Menu;
pub use sensor_fleet_core::{BoxedSensor, FleetReport, Sensor, SensorKind, SensorRegistry};
pub use sensor_fleet_sources::{create_sensor, PressureSensor, TemperatureSensor, VibrationSensor};
pub use simulator::ReadingSimulator;
