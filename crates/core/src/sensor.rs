//! Sensor trait and related types

use sensor_fleet_types::{
    Assessment, Reading, SensorDescription, SensorIdentity, SensorKind, Status,
};
use std::fmt;

/// Trait for all sensors
///
/// A sensor owns an identity (id + location) and a reading sequence whose
/// numeric type is fixed by its kind. The registry only talks to sensors
/// through this trait and never looks at the concrete type.
pub trait Sensor: Send + Sync + fmt::Debug {
    /// Kind of this sensor
    fn kind(&self) -> SensorKind;

    /// Identifier and location
    fn identity(&self) -> &SensorIdentity;

    /// Append a reading
    ///
    /// The reading is converted to the sensor's numeric kind: integer
    /// sensors truncate float readings, float sensors widen integers.
    fn add_reading(&mut self, reading: Reading);

    /// Number of readings recorded so far
    fn reading_count(&self) -> usize;

    /// Average of all readings, `None` when there are none
    fn average(&self) -> Option<Reading>;

    /// All readings in insertion order
    fn readings(&self) -> Vec<Reading>;

    /// Classify an average against this kind's fixed thresholds
    fn classify(&self, average: Reading) -> Status;

    /// Deep copy behind a fresh box
    fn clone_boxed(&self) -> BoxedSensor;

    fn id(&self) -> &str {
        self.identity().id()
    }

    fn location(&self) -> &str {
        self.identity().location()
    }

    /// Evaluate the readings
    ///
    /// A sensor without readings reports `Status::NoReadings` and is not
    /// classified. Processing never mutates the sensor.
    fn process_reading(&self) -> Assessment {
        let average = self.average();
        let status = match average {
            Some(avg) => self.classify(avg),
            None => Status::NoReadings,
        };

        Assessment {
            sensor_id: self.id().to_string(),
            kind: self.kind(),
            average,
            status,
        }
    }

    /// Snapshot of identity and readings for display
    fn describe(&self) -> SensorDescription {
        SensorDescription {
            kind: self.kind(),
            id: self.id().to_string(),
            location: self.location().to_string(),
            readings: self.readings(),
        }
    }
}

/// Type-erased sensor for dynamic dispatch
pub type BoxedSensor = Box<dyn Sensor>;

impl Clone for BoxedSensor {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
