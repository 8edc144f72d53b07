//! Registry owning every known sensor

use super::sensor::{BoxedSensor, Sensor};
use sensor_fleet_types::{Assessment, SensorDescription};

/// Result of a bulk operation over the registry
///
/// `NoSensors` is informational, not an error: it tells the caller there
/// was nothing to walk.
#[derive(Debug, Clone, PartialEq)]
pub enum FleetReport<T> {
    NoSensors,
    Sensors(Vec<T>),
}

impl<T> FleetReport<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            FleetReport::NoSensors => true,
            FleetReport::Sensors(items) => items.is_empty(),
        }
    }

    /// Per-sensor entries (empty for `NoSensors`)
    pub fn entries(&self) -> &[T] {
        match self {
            FleetReport::NoSensors => &[],
            FleetReport::Sensors(items) => items,
        }
    }
}

/// Ordered collection of sensors
///
/// Insertion order is iteration order. Sensors can only be added, never
/// removed; dropping the registry drops each sensor exactly once.
///
/// Identifiers are expected to be unique but this is not enforced: lookup
/// returns the first match, so a later duplicate is unreachable by id while
/// still taking part in `process_all` and `describe_all`.
#[derive(Debug, Clone, Default)]
pub struct SensorRegistry {
    sensors: Vec<BoxedSensor>,
}

impl SensorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sensors: Vec::new(),
        }
    }

    /// Take ownership of a sensor and append it
    ///
    /// Returns a handle to the sensor just inserted so callers can feed it
    /// without a second lookup.
    pub fn add(&mut self, sensor: BoxedSensor) -> &mut BoxedSensor {
        if self.contains(sensor.id()) {
            log::warn!(
                "Sensor id '{}' already registered; the new sensor will not be reachable by id",
                sensor.id()
            );
        }
        log::info!(
            "Registered {} sensor '{}' at '{}'",
            sensor.kind(),
            sensor.id(),
            sensor.location()
        );

        let index = self.sensors.len();
        self.sensors.push(sensor);
        &mut self.sensors[index]
    }

    /// Find the first sensor with exactly this id (case-sensitive)
    pub fn find_by_id(&self, id: &str) -> Option<&dyn Sensor> {
        self.sensors
            .iter()
            .find(|sensor| sensor.id() == id)
            .map(|sensor| sensor.as_ref())
    }

    /// Mutable variant of `find_by_id`
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut BoxedSensor> {
        self.sensors.iter_mut().find(|sensor| sensor.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sensors.iter().any(|sensor| sensor.id() == id)
    }

    /// Number of owned sensors
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Sensors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Sensor> + '_ {
        self.sensors.iter().map(|sensor| sensor.as_ref())
    }

    /// Process every sensor in insertion order
    pub fn process_all(&self) -> FleetReport<Assessment> {
        if self.sensors.is_empty() {
            log::info!("No sensors registered");
            return FleetReport::NoSensors;
        }

        log::info!("Processing {} sensors", self.sensors.len());
        let assessments = self
            .sensors
            .iter()
            .map(|sensor| {
                let assessment = sensor.process_reading();
                log::debug!("Sensor {}: {:?}", assessment.sensor_id, assessment.status);
                assessment
            })
            .collect();

        FleetReport::Sensors(assessments)
    }

    /// Describe every sensor in insertion order
    pub fn describe_all(&self) -> FleetReport<SensorDescription> {
        if self.sensors.is_empty() {
            log::info!("No sensors registered");
            return FleetReport::NoSensors;
        }

        FleetReport::Sensors(self.sensors.iter().map(|sensor| sensor.describe()).collect())
    }
}
