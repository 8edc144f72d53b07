//! Health assessment produced by processing a sensor's readings

use crate::reading::Reading;
use crate::sensor::SensorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind-specific alert raised when an average leaves its normal band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    LowTemperature,
    HighTemperature,
    /// Low pressure, usually a storm approaching
    LowPressure,
    HighPressure,
    ModerateVibration,
    /// High vibration, the equipment should be inspected
    HighVibration,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Alert::LowTemperature => "Low temperature",
            Alert::HighTemperature => "High temperature",
            Alert::LowPressure => "Low pressure (storm)",
            Alert::HighPressure => "High pressure",
            Alert::ModerateVibration => "Moderate vibration",
            Alert::HighVibration => "High vibration - inspect!",
        };
        f.write_str(message)
    }
}

/// Outcome of classifying a sensor's average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "alert", rename_all = "snake_case")]
pub enum Status {
    /// The sensor has no readings; nothing was evaluated
    NoReadings,
    Normal,
    Alert(Alert),
}

impl Status {
    pub fn is_alert(&self) -> bool {
        matches!(self, Status::Alert(_))
    }
}

/// Result of `Sensor::process_reading`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub sensor_id: String,
    pub kind: SensorKind,
    /// Average of the readings, `None` when there were none
    pub average: Option<Reading>,
    pub status: Status,
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(average) = self.average else {
            return writeln!(f, "  No readings");
        };

        let unit = self.kind.unit();
        match average {
            Reading::Float(v) if unit.is_empty() => writeln!(f, "  Average: {:.2}", v)?,
            Reading::Float(v) => writeln!(f, "  Average: {:.2} {}", v, unit)?,
            Reading::Integer(v) if unit.is_empty() => writeln!(f, "  Average: {}", v)?,
            Reading::Integer(v) => writeln!(f, "  Average: {} {}", v, unit)?,
        }

        match self.status {
            Status::Alert(alert) => writeln!(f, "  ALERT: {}", alert),
            Status::Normal => writeln!(f, "  Status: Normal"),
            Status::NoReadings => writeln!(f, "  Status: No readings"),
        }
    }
}
