//! sensor-fleet-types: Shared data types for the sensor-fleet workspace.
//!
//! This crate contains pure data types (readings, reading sequences, sensor
//! kinds, assessments, descriptions) shared by every other crate. Nothing
//! here knows about the registry or any concrete sensor.

pub mod description;
pub mod reading;
pub mod sensor;
pub mod sequence;
pub mod status;

// Re-export commonly used types at the crate root for convenience
pub use description::SensorDescription;
pub use reading::{NumericKind, Reading, Sample};
pub use sensor::{SensorIdentity, SensorKind};
pub use sequence::ReadingSequence;
pub use status::{Alert, Assessment, Status};
