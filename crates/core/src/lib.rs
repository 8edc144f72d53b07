//! sensor-fleet-core: Core trait and registry for sensor-fleet.
//!
//! This crate contains the `Sensor` capability trait, the `SensorRegistry`
//! that owns sensors polymorphically, and the fixed alert thresholds.

pub mod constants;
mod registry;
mod sensor;

pub use registry::{FleetReport, SensorRegistry};
pub use sensor::{BoxedSensor, Sensor};

// Re-export types used in trait signatures for convenience
pub use sensor_fleet_types::{
    Alert, Assessment, NumericKind, Reading, ReadingSequence, Sample, SensorDescription,
    SensorIdentity, SensorKind, Status,
};
