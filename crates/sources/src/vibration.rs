//! Vibration sensor (intensity 0-100, integer readings)

use sensor_fleet_core::constants::{VIBRATION_HIGH, VIBRATION_MODERATE};
use sensor_fleet_core::{
    Alert, BoxedSensor, Reading, ReadingSequence, Sample, Sensor, SensorIdentity, SensorKind,
    Status,
};

/// Vibration sensor
#[derive(Debug, Clone, PartialEq)]
pub struct VibrationSensor {
    identity: SensorIdentity,
    readings: ReadingSequence<i32>,
}

impl VibrationSensor {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            identity: SensorIdentity::new(id, location),
            readings: ReadingSequence::new(),
        }
    }

    /// Record a vibration intensity
    pub fn record(&mut self, intensity: i32) {
        self.readings.push(intensity);
    }

    pub fn readings_ref(&self) -> &ReadingSequence<i32> {
        &self.readings
    }
}

/// Classify an average vibration level
///
/// Below 30 is normal, 30 up to 59 is moderate, 60 and above needs inspection.
pub fn classify_vibration(average: i32) -> Status {
    if average < VIBRATION_MODERATE {
        Status::Normal
    } else if average < VIBRATION_HIGH {
        Status::Alert(Alert::ModerateVibration)
    } else {
        Status::Alert(Alert::HighVibration)
    }
}

impl Sensor for VibrationSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Vibration
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
        classify_vibration(i32::from_reading(average))
    }

    fn clone_boxed(&self) -> BoxedSensor {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(classify_vibration(0), Status::Normal);
        assert_eq!(classify_vibration(29), Status::Normal);
        assert_eq!(classify_vibration(30), Status::Alert(Alert::ModerateVibration));
        assert_eq!(classify_vibration(59), Status::Alert(Alert::ModerateVibration));
        assert_eq!(classify_vibration(60), Status::Alert(Alert::HighVibration));
    }

    #[test]
    fn test_single_high_reading() {
        let mut sensor = VibrationSensor::new("V-1", "Pump");
        sensor.record(75);

        let assessment = sensor.process_reading();
        assert_eq!(assessment.average, Some(Reading::Integer(75)));
        assert_eq!(assessment.status, Status::Alert(Alert::HighVibration));
    }

    #[test]
    fn test_truncated_average_stays_in_lower_band() {
        // (29 + 30) / 2 = 29 with integer division
        let mut sensor = VibrationSensor::new("V-1", "Pump");
        sensor.record(29);
        sensor.record(30);
        assert_eq!(sensor.process_reading().status, Status::Normal);
    }

    #[test]
    fn test_clone_boxed_is_independent() {
        let mut sensor = VibrationSensor::new("V-1", "Pump");
        sensor.record(10);

        let mut copy = sensor.clone_boxed();
        copy.add_reading(Reading::Integer(90));

        assert_eq!(sensor.readings_ref().as_slice(), &[10]);
        assert_eq!(copy.reading_count(), 2);
        assert_eq!(copy.kind(), SensorKind::Vibration);
    }
}
