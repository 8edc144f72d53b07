//! Temperature sensor (degrees Celsius, float readings)

use sensor_fleet_core::constants::{TEMPERATURE_HIGH_C, TEMPERATURE_LOW_C};
use sensor_fleet_core::{
    Alert, BoxedSensor, Reading, ReadingSequence, Sample, Sensor, SensorIdentity, SensorKind,
    Status,
};

/// Temperature sensor
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSensor {
    identity: SensorIdentity,
    readings: ReadingSequence<f32>,
}

impl TemperatureSensor {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            identity: SensorIdentity::new(id, location),
            readings: ReadingSequence::new(),
        }
    }

    /// Record a temperature in degrees Celsius
    pub fn record(&mut self, celsius: f32) {
        self.readings.push(celsius);
    }

    pub fn readings_ref(&self) -> &ReadingSequence<f32> {
        &self.readings
    }
}

/// Classify an average temperature; 15.0 and 30.0 are still normal
pub fn classify_temperature(average: f32) -> Status {
    if average < TEMPERATURE_LOW_C {
        Status::Alert(Alert::LowTemperature)
    } else if average > TEMPERATURE_HIGH_C {
        Status::Alert(Alert::HighTemperature)
    } else {
        Status::Normal
    }
}

impl Sensor for TemperatureSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn identity(&self) -> &SensorIdentity {
        &self.identity
    }

    fn add_reading(&mut self, reading: Reading) {
        self.record(f32::from_reading(reading));
    }

    fn reading_count(&self) -> usize {
        self.readings.len()
    }

    fn average(&self) -> Option<Reading> {
        if self.readings.is_empty() {
            None
        } else {
            Some(Reading::Float(self.readings.average()))
        }
    }

    fn readings(&self) -> Vec<Reading> {
        self.readings.iter().map(|&v| Reading::Float(v)).collect()
    }

    fn classify(&self, average: Reading) -> Status {
        classify_temperature(f32::from_reading(average))
    }

    fn clone_boxed(&self) -> BoxedSensor {
        Box::new(self.clone())
    }
}
