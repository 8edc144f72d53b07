//! Simulated field-device feed
//!
//! Produces `KIND:ID:VALUE` lines the way the serial feed of a small
//! microcontroller board would: one fixed sensor id per kind, values drawn
//! from plausible ranges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sensor_fleet_core::SensorKind;

/// Sensor ids used by the simulated board
pub const SIMULATED_TEMPERATURE_ID: &str = "T-001";
pub const SIMULATED_PRESSURE_ID: &str = "P-105";
pub const SIMULATED_VIBRATION_ID: &str = "V-201";

/// Generator of simulated ingest lines
///
/// The random state is owned by the simulator; pass a seed for
/// reproducible sequences.
#[derive(Debug, Clone)]
pub struct ReadingSimulator {
    rng: StdRng,
}

impl ReadingSimulator {
    /// Deterministic simulator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Simulator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Temperature between 20.0 and 29.9 in 0.1 steps
    pub fn temperature_line(&mut self) -> String {
        let tenths = self.rng.gen_range(0..100);
        let celsius = 20.0 + tenths as f32 / 10.0;
        format!(
            "{}:{}:{:.1}",
            SensorKind::Temperature.wire_token(),
            SIMULATED_TEMPERATURE_ID,
            celsius
        )
    }

    /// Pressure between 1000 and 1049 hPa
    pub fn pressure_line(&mut self) -> String {
        let hpa = 1000 + self.rng.gen_range(0..50);
        format!(
            "{}:{}:{}",
            SensorKind::Pressure.wire_token(),
            SIMULATED_PRESSURE_ID,
            hpa
        )
    }

    /// Vibration between 0 and 79
    pub fn vibration_line(&mut self) -> String {
        let level = self.rng.gen_range(0..80);
        format!(
            "{}:{}:{}",
            SensorKind::Vibration.wire_token(),
            SIMULATED_VIBRATION_ID,
            level
        )
    }

    /// One line of a uniformly chosen kind
    pub fn next_line(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => self.temperature_line(),
            1 => self.pressure_line(),
            _ => self.vibration_line(),
        }
    }

    /// `count` lines
    pub fn generate(&mut self, count: usize) -> Vec<String> {
        let lines: Vec<String> = (0..count).map(|_| self.next_line()).collect();
        log::debug!("Simulated {} ingest lines", lines.len());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_line;

    #[test]
    fn test_same_seed_same_lines() {
        let a = ReadingSimulator::with_seed(42).generate(20);
        let b = ReadingSimulator::with_seed(42).generate(20);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn test_lines_parse_and_stay_in_range() {
        let mut simulator = ReadingSimulator::with_seed(7);
        for line in simulator.generate(300) {
            let record = parse_line(&line).expect("simulated line parses");
            let value: f64 = record.value.parse().expect("numeric value");

            match record.kind().expect("known kind") {
                SensorKind::Temperature => {
                    assert_eq!(record.id, SIMULATED_TEMPERATURE_ID);
                    assert!((20.0..=29.9).contains(&value), "temperature {}", value);
                }
                SensorKind::Pressure => {
                    assert_eq!(record.id, SIMULATED_PRESSURE_ID);
                    assert!((1000.0..=1049.0).contains(&value), "pressure {}", value);
                }
                SensorKind::Vibration => {
                    assert_eq!(record.id, SIMULATED_VIBRATION_ID);
                    assert!((0.0..=79.0).contains(&value), "vibration {}", value);
                }
            }
        }
    }

    #[test]
    fn test_all_kinds_eventually_generated() {
        let lines = ReadingSimulator::with_seed(1).generate(100);
        for kind in SensorKind::ALL {
            assert!(
                lines.iter().any(|line| line.starts_with(kind.wire_token())),
                "no {} line in 100 draws",
                kind
            );
        }
    }

    #[test]
    fn test_temperature_has_one_decimal() {
        let line = ReadingSimulator::with_seed(3).temperature_line();
        let value = line.rsplit(':').next().unwrap();
        assert_eq!(value.split('.').nth(1).map(str::len), Some(1));
    }
}
