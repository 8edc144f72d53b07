//! Atmospheric pressure sensor (hPa, integer readings)

use sensor_fleet_core::constants::{PRESSURE_HIGH_HPA, PRESSURE_LOW_HPA};
use sensor_fleet_core::{
    Alert, BoxedSensor, Reading, ReadingSequence, Sample, Sensor, SensorIdentity, SensorKind,
    Status,
};

/// Pressure sensor
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSensor {
    identity: SensorIdentity,
    readings: ReadingSequence<i32>,
}

impl PressureSensor {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            identity: SensorIdentity::new(id, location),
            readings: ReadingSequence::new(),
        }
    }

    /// Record a pressure in hPa
    pub fn record(&mut self, hpa: i32) {
        self.readings.push(hpa);
    }

    pub fn readings_ref(&self) -> &ReadingSequence<i32> {
        &self.readings
    }
}

/// Classify an average pressure; 980 and 1050 are still normal
pub fn classify_pressure(average: i32) -> Status {
    if average < PRESSURE_LOW_HPA {
        Status::Alert(Alert::LowPressure)
    } else if average > PRESSURE_HIGH_HPA {
        Status::Alert(Alert::HighPressure)
    } else {
        Status::Normal
    }
}

impl Sensor for PressureSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
    }

    fn identity(&self) -> &SensorIdentity {
        &self.identity
    }

    fn add_reading(&mut self, reading: Reading) {
        self.record(i32::from_reading(reading));
    }

    fn reading_count(&self) -> usize {
        self.readings.len()
    }

    fn average(&self) -> Option<Reading> {
        if self.readings.is_empty() {
            None
        } else {
            Some(Reading::Integer(self.readings.average()))
        }
    }

    fn readings(&self) -> Vec<Reading> {
        self.readings.iter().map(|&v| Reading::Integer(v)).collect()
    }

    fn classify(&self, average: Reading) -> Status {
        classify_pressure(i32::from_reading(average))
    }

    fn clone_boxed(&self) -> BoxedSensor {
        Box::new(self.clone())
    }
}
