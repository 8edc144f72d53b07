//! sensor-fleet-sources: Sensor implementations for sensor-fleet.

mod pressure;
mod temperature;
mod vibration;

pub use pressure::{classify_pressure, PressureSensor};
pub use temperature::{classify_temperature, TemperatureSensor};
pub use vibration::{classify_vibration, VibrationSensor};

use sensor_fleet_core::{BoxedSensor, SensorKind};

/// Construct an empty sensor of the given kind
///
/// This is the only place that maps a kind to a concrete type; everything
/// else works through the `Sensor` trait.
pub fn create_sensor(
    kind: SensorKind,
    id: impl Into<String>,
    location: impl Into<String>,
) -> BoxedSensor {
    let (id, location) = (id.into(), location.into());
    log::debug!("Creating {} sensor '{}' at '{}'", kind, id, location);

    match kind {
        SensorKind::Temperature => Box::new(TemperatureSensor::new(id, location)),
        SensorKind::Pressure => Box::new(PressureSensor::new(id, location)),
        SensorKind::Vibration => Box::new(VibrationSensor::new(id, location)),
    }
}
