//! Ingest of `KIND:ID:VALUE` lines into the registry
//!
//! A line names a sensor kind (`TEMP`, `PRES`, `VIBR`), a sensor id and a
//! decimal value. Unknown ids are provisioned on first sight with a
//! configurable location, then the reading is appended.

use sensor_fleet_core::{Reading, SensorKind, SensorRegistry};
use sensor_fleet_sources::create_sensor;
use thiserror::Error;

use crate::config::IngestConfig;

/// Errors raised while turning a line into a registry mutation
///
/// None of these are fatal: callers log them and move on to the next line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("Malformed ingest line '{line}': expected KIND:ID:VALUE")]
    Malformed { line: String },

    #[error("Unknown sensor kind '{token}' for new sensor '{id}'")]
    UnknownKind { token: String, id: String },

    #[error("Invalid reading value '{value}' for sensor '{id}'")]
    InvalidValue { id: String, value: String },
}

/// A parsed ingest line
#[derive(Debug, Clone, PartialEq)]
pub struct IngestRecord {
    /// Kind token as received, resolved only when a sensor must be created
    pub kind_token: String,
    pub id: String,
    /// Value text, converted to the target sensor's numeric kind on apply
    pub value: String,
}

impl IngestRecord {
    /// Kind named by the token, if any
    pub fn kind(&self) -> Option<SensorKind> {
        SensorKind::from_wire_token(&self.kind_token)
    }
}

/// What applying a record did to the registry
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    pub sensor_id: String,
    pub kind: SensorKind,
    /// True when the sensor did not exist and was provisioned
    pub created: bool,
    /// Reading as stored by the sensor
    pub reading: Reading,
}

/// Split a line into kind, id and value tokens
///
/// Empty tokens are skipped (`"TEMP::T-1:20"` reads as `TEMP`, `T-1`, `20`)
/// and anything after the third token is ignored. Fewer than three tokens is
/// a `Malformed` error.
pub fn parse_line(line: &str) -> Result<IngestRecord, IngestError> {
    let mut tokens = line
        .trim()
        .split(':')
        .map(str::trim)
        .filter(|token| !token.is_empty());

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(kind), Some(id), Some(value)) => Ok(IngestRecord {
            kind_token: kind.to_string(),
            id: id.to_string(),
            value: value.to_string(),
        }),
        _ => Err(IngestError::Malformed {
            line: line.trim().to_string(),
        }),
    }
}

/// Applies ingest records to a registry
#[derive(Debug, Clone)]
pub struct Ingestor {
    provisioning_location: String,
}

impl Ingestor {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            provisioning_location: config.provisioning_location.clone(),
        }
    }

    pub fn provisioning_location(&self) -> &str {
        &self.provisioning_location
    }

    /// Parse and apply one line
    pub fn apply_line(
        &self,
        registry: &mut SensorRegistry,
        line: &str,
    ) -> Result<IngestOutcome, IngestError> {
        let record = parse_line(line)?;
        self.apply(registry, &record)
    }

    /// Apply a parsed record
    ///
    /// The value is converted to the numeric kind of the sensor that ends up
    /// receiving it, so a `TEMP` line aimed at an existing pressure sensor is
    /// stored as a truncated integer. The conversion is checked before the
    /// registry is touched, so a rejected line never provisions a sensor.
    pub fn apply(
        &self,
        registry: &mut SensorRegistry,
        record: &IngestRecord,
    ) -> Result<IngestOutcome, IngestError> {
        let value = parse_value(record)?;

        let existing = registry.find_by_id(&record.id).map(|sensor| sensor.kind());
        let kind = match existing {
            Some(kind) => kind,
            None => record.kind().ok_or_else(|| IngestError::UnknownKind {
                token: record.kind_token.clone(),
                id: record.id.clone(),
            })?,
        };
        let reading = Reading::try_from_f64(kind.numeric_kind(), value)
            .ok_or_else(|| invalid_value(record))?;

        let created = existing.is_none();
        let sensor = match registry.find_by_id_mut(&record.id) {
            Some(sensor) => sensor,
            None => registry.add(create_sensor(
                kind,
                record.id.as_str(),
                self.provisioning_location.as_str(),
            )),
        };
        sensor.add_reading(reading);

        log::debug!(
            "Ingested {} into {} sensor '{}'{}",
            reading,
            kind,
            record.id,
            if created { " (provisioned)" } else { "" }
        );

        Ok(IngestOutcome {
            sensor_id: record.id.clone(),
            kind,
            created,
            reading,
        })
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}

fn parse_value(record: &IngestRecord) -> Result<f64, IngestError> {
    record
        .value
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid_value(record))
}

fn invalid_value(record: &IngestRecord) -> IngestError {
    IngestError::InvalidValue {
        id: record.id.clone(),
        value: record.value.clone(),
    }
}
