//! Sensor kind and identity types

use crate::reading::NumericKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of sensor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    /// Temperature in degrees Celsius (float samples)
    Temperature,
    /// Atmospheric pressure in hPa (integer samples)
    Pressure,
    /// Vibration intensity on a 0-100 scale (integer samples)
    Vibration,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Temperature,
        SensorKind::Pressure,
        SensorKind::Vibration,
    ];

    /// Numeric kind of this sensor's readings
    pub fn numeric_kind(&self) -> NumericKind {
        match self {
            SensorKind::Temperature => NumericKind::Float,
            SensorKind::Pressure | SensorKind::Vibration => NumericKind::Integer,
        }
    }

    /// Upper-case tag used when describing a sensor
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "TEMPERATURE",
            SensorKind::Pressure => "PRESSURE",
            SensorKind::Vibration => "VIBRATION",
        }
    }

    /// Token used in the `KIND:ID:VALUE` ingest format
    pub fn wire_token(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "TEMP",
            SensorKind::Pressure => "PRES",
            SensorKind::Vibration => "VIBR",
        }
    }

    /// Look up a kind by its ingest token (case-sensitive)
    pub fn from_wire_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wire_token() == token)
    }

    /// Display unit for averages ("" when unitless)
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "C",
            SensorKind::Pressure => "hPa",
            SensorKind::Vibration => "",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier and location of a sensor, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorIdentity {
    id: String,
    location: String,
}

impl SensorIdentity {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
