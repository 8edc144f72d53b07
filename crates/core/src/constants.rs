//! Fixed alert thresholds for each sensor kind
//!
//! Thresholds are not configurable. A value equal to a low/high bound is
//! still inside the normal band, except for vibration where the bounds are
//! the first value of the next band.

/// Averages below this raise a low-temperature alert (degrees Celsius)
pub const TEMPERATURE_LOW_C: f32 = 15.0;

/// Averages above this raise a high-temperature alert (degrees Celsius)
pub const TEMPERATURE_HIGH_C: f32 = 30.0;

/// Averages below this raise a low-pressure (storm) alert (hPa)
pub const PRESSURE_LOW_HPA: i32 = 980;

/// Averages above this raise a high-pressure alert (hPa)
pub const PRESSURE_HIGH_HPA: i32 = 1050;

/// First vibration level that counts as moderate
pub const VIBRATION_MODERATE: i32 = 30;

/// First vibration level that calls for inspection
pub const VIBRATION_HIGH: i32 = 60;

/// Location given to sensors created on first sight by the ingest path
pub const DEFAULT_PROVISIONING_LOCATION: &str = "Arduino";
