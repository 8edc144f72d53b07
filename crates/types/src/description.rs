//! Display snapshot of a sensor

use crate::reading::Reading;
use crate::sensor::SensorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity, location and the full ordered readings of one sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDescription {
    pub kind: SensorKind,
    pub id: String,
    pub location: String,
    pub readings: Vec<Reading>,
}

impl SensorDescription {
    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }
}

impl fmt::Display for SensorDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.kind.label())?;
        writeln!(f, "  ID: {}", self.id)?;
        writeln!(f, "  Location: {}", self.location)?;
        write!(f, "  Readings ({}): [", self.readings.len())?;
        for (i, reading) in self.readings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", reading)?;
        }
        writeln!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_display() {
        let description = SensorDescription {
            kind: SensorKind::Temperature,
            id: "T-1".to_string(),
            location: "Lab".to_string(),
            readings: vec![Reading::Float(10.0), Reading::Float(20.5)],
        };

        assert_eq!(
            description.to_string(),
            "[TEMPERATURE]\n  ID: T-1\n  Location: Lab\n  Readings (2): [10, 20.5]\n"
        );
    }

    #[test]
    fn test_description_serialization() {
        let description = SensorDescription {
            kind: SensorKind::Pressure,
            id: "P-105".to_string(),
            location: "Arduino".to_string(),
            readings: vec![Reading::Integer(1013)],
        };

        let json = serde_json::to_string(&description).unwrap();
        assert!(json.contains("\"kind\":\"pressure\""));
        assert!(json.contains("\"readings\":[1013]"));

        let back: SensorDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, description);
    }
}
