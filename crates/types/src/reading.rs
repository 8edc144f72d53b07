//! Reading values and the numeric kinds a sensor can store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric representation used by a sensor's reading sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Floating-point samples (temperature)
    Float,
    /// Integer samples (pressure, vibration)
    Integer,
}

/// A single sample with its numeric kind erased
///
/// This is what flows through the `Sensor` capability, so that callers can
/// feed any sensor without knowing which concrete variant they hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Integer(i32),
    Float(f32),
}

impl Reading {
    /// Numeric kind of this reading
    pub fn numeric_kind(&self) -> NumericKind {
        match self {
            Reading::Integer(_) => NumericKind::Integer,
            Reading::Float(_) => NumericKind::Float,
        }
    }

    /// Widen to f64 (lossless for both variants)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Reading::Integer(v) => f64::from(v),
            Reading::Float(v) => f64::from(v),
        }
    }

    /// Build a reading of the requested kind from a decimal value.
    ///
    /// Integer kinds truncate toward zero, so `"1013.7"` becomes `1013`.
    /// Returns `None` when the value does not fit the kind: non-finite input,
    /// floats that overflow `f32`, or integers outside the `i32` range.
    pub fn try_from_f64(kind: NumericKind, value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        match kind {
            NumericKind::Float => {
                let narrowed = value as f32;
                narrowed.is_finite().then_some(Reading::Float(narrowed))
            }
            NumericKind::Integer => {
                let truncated = value.trunc();
                let in_range =
                    truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX);
                in_range.then_some(Reading::Integer(truncated as i32))
            }
        }
    }
}

impl From<f32> for Reading {
    fn from(value: f32) -> Self {
        Reading::Float(value)
    }
}

impl From<i32> for Reading {
    fn from(value: i32) -> Self {
        Reading::Integer(value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Integer(v) => write!(f, "{}", v),
            Reading::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Numeric type that can be stored in a `ReadingSequence`
///
/// The averaging rule is part of the type: integer samples use truncating
/// division, floating samples use floating-point division.
pub trait Sample:
    Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Kind tag for this sample type
    const KIND: NumericKind;

    /// Arithmetic mean of `values`, or zero when empty
    fn mean(values: &[Self]) -> Self;

    /// Convert a kind-erased reading into this sample type
    fn from_reading(reading: Reading) -> Self;

    /// Erase the sample type
    fn into_reading(self) -> Reading;
}

impl Sample for f32 {
    const KIND: NumericKind = NumericKind::Float;

    fn mean(values: &[Self]) -> Self {
        if values.is_empty() {
            return 0.0;
        }
        let sum = values.iter().fold(0.0f32, |acc, v| acc + v);
        sum / values.len() as f32
    }

    fn from_reading(reading: Reading) -> Self {
        match reading {
            Reading::Float(v) => v,
            Reading::Integer(v) => v as f32,
        }
    }

    fn into_reading(self) -> Reading {
        Reading::Float(self)
    }
}

impl Sample for i32 {
    const KIND: NumericKind = NumericKind::Integer;

    fn mean(values: &[Self]) -> Self {
        if values.is_empty() {
            return 0;
        }
        // Accumulate wide so long runs of large pressures cannot overflow;
        // the quotient always fits back into i32.
        let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
        (sum / values.len() as i64) as i32
    }

    fn from_reading(reading: Reading) -> Self {
        match reading {
            Reading::Integer(v) => v,
            Reading::Float(v) => v as i32,
        }
    }

    fn into_reading(self) -> Reading {
        Reading::Integer(self)
    }
}
