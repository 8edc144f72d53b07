//! Interactive console menu

use anyhow::Result;
use sensor_fleet_core::{Reading, SensorKind, SensorRegistry};
use sensor_fleet_sources::create_sensor;
use std::io::{BufRead, Write};

use crate::ingest::Ingestor;
use crate::report::{write_describe_report, write_process_report};
use crate::simulator::ReadingSimulator;

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateSensor(SensorKind),
    AddReading,
    Simulate,
    ProcessAll,
    DescribeAll,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::CreateSensor(SensorKind::Temperature)),
            2 => Some(MenuChoice::CreateSensor(SensorKind::Pressure)),
            3 => Some(MenuChoice::CreateSensor(SensorKind::Vibration)),
            4 => Some(MenuChoice::AddReading),
            5 => Some(MenuChoice::Simulate),
            6 => Some(MenuChoice::ProcessAll),
            7 => Some(MenuChoice::DescribeAll),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive loop over a registry
///
/// Generic over its input and output so it can be driven from tests.
pub struct Menu<R, W> {
    input: R,
    output: W,
    registry: SensorRegistry,
    ingestor: Ingestor,
    simulator: ReadingSimulator,
    batch_size: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(
        input: R,
        output: W,
        ingestor: Ingestor,
        simulator: ReadingSimulator,
        batch_size: usize,
    ) -> Self {
        Self {
            input,
            output,
            registry: SensorRegistry::new(),
            ingestor,
            simulator,
            batch_size,
        }
    }

    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> SensorRegistry {
        self.registry
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Sensor Fleet ===")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                log::debug!("Input closed, leaving menu");
                break;
            };

            let choice = line.parse::<u32>().ok().and_then(MenuChoice::from_number);
            match choice {
                Some(MenuChoice::CreateSensor(kind)) => self.create_sensor(kind)?,
                Some(MenuChoice::AddReading) => self.add_reading()?,
                Some(MenuChoice::Simulate) => self.simulate()?,
                Some(MenuChoice::ProcessAll) => {
                    write_process_report(&mut self.output, &self.registry.process_all())?
                }
                Some(MenuChoice::DescribeAll) => {
                    write_describe_report(&mut self.output, &self.registry.describe_all())?
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\nShutting down...")?;
                    break;
                }
                None => writeln!(self.output, "Invalid option.")?,
            }
        }

        writeln!(self.output, "\nGoodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Sensor Fleet Menu ===")?;
        writeln!(self.output, "1. Create temperature sensor")?;
        writeln!(self.output, "2. Create pressure sensor")?;
        writeln!(self.output, "3. Create vibration sensor")?;
        writeln!(self.output, "4. Add manual reading")?;
        writeln!(self.output, "5. Simulate device ({} readings)", self.batch_size)?;
        writeln!(self.output, "6. Process sensors")?;
        writeln!(self.output, "7. Show sensors")?;
        writeln!(self.output, "8. Exit")?;
        write!(self.output, "Option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed input line, `None` on end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn create_sensor(&mut self, kind: SensorKind) -> Result<()> {
        let example = match kind {
            SensorKind::Temperature => "T-001",
            SensorKind::Pressure => "P-105",
            SensorKind::Vibration => "V-201",
        };

        let Some(id) = self.prompt(&format!("Sensor id (e.g. {}): ", example))? else {
            return Ok(());
        };
        if id.is_empty() {
            writeln!(self.output, "Sensor id cannot be empty!")?;
            return Ok(());
        }
        let Some(location) = self.prompt("Location: ")? else {
            return Ok(());
        };

        self.registry.add(create_sensor(kind, id, location));
        writeln!(self.output, "Sensor created!")?;
        Ok(())
    }

    fn add_reading(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Sensor id: ")? else {
            return Ok(());
        };
        let Some(kind) = self.registry.find_by_id(&id).map(|sensor| sensor.kind()) else {
            writeln!(self.output, "Sensor not found!")?;
            return Ok(());
        };

        let label = match kind {
            SensorKind::Temperature => "Temperature (C): ",
            SensorKind::Pressure => "Pressure (hPa): ",
            SensorKind::Vibration => "Vibration (0-100): ",
        };
        let Some(text) = self.prompt(label)? else {
            return Ok(());
        };
        let reading = text
            .parse::<f64>()
            .ok()
            .and_then(|value| Reading::try_from_f64(kind.numeric_kind(), value));
        let Some(reading) = reading else {
            writeln!(self.output, "Invalid value!")?;
            return Ok(());
        };

        if let Some(sensor) = self.registry.find_by_id_mut(&id) {
            sensor.add_reading(reading);
            writeln!(self.output, "Reading added!")?;
        }
        Ok(())
    }

    fn simulate(&mut self) -> Result<()> {
        writeln!(self.output, "\nSimulating {} device readings...", self.batch_size)?;

        for line in self.simulator.generate(self.batch_size) {
            writeln!(self.output, "  Received: {}", line)?;
            if let Err(e) = self.ingestor.apply_line(&mut self.registry, &line) {
                log::warn!("{}", e);
                writeln!(self.output, "  Skipped: {}", e)?;
            }
        }

        writeln!(self.output, "Simulation complete!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (SensorRegistry, String) {
        let mut output = Vec::new();
        let mut menu = Menu::new(
            Cursor::new(script.as_bytes()),
            &mut output,
            Ingestor::default(),
            ReadingSimulator::with_seed(11),
            5,
        );
        menu.run().unwrap();
        let registry = menu.into_registry();
        (registry, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_choice_numbers() {
        assert_eq!(
            MenuChoice::from_number(1),
            Some(MenuChoice::CreateSensor(SensorKind::Temperature))
        );
        assert_eq!(MenuChoice::from_number(8), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(9), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (registry, output) = run_script("8\n");
        assert!(registry.is_empty());
        assert!(output.contains("Shutting down"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (registry, output) = run_script("");
        assert!(registry.is_empty());
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_create_and_add_readings() {
        let script = "1\nT-1\nLab\n4\nT-1\n21.5\n2\nP-1\nRoof\n4\nP-1\n1013.9\n8\n";
        let (registry, output) = run_script(script);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.find_by_id("T-1").map(|s| s.readings()),
            Some(vec![Reading::Float(21.5)])
        );
        assert_eq!(
            registry.find_by_id("P-1").map(|s| s.readings()),
            Some(vec![Reading::Integer(1013)])
        );
        assert_eq!(output.matches("Sensor created!").count(), 2);
        assert_eq!(output.matches("Reading added!").count(), 2);
    }

    #[test]
    fn test_add_reading_unknown_sensor() {
        let (_, output) = run_script("4\nnope\n8\n");
        assert!(output.contains("Sensor not found!"));
    }

    #[test]
    fn test_invalid_option_and_value() {
        let (registry, output) = run_script("42\n3\nV-1\nPump\n4\nV-1\nloud\n8\n");
        assert!(output.contains("Invalid option."));
        assert!(output.contains("Invalid value!"));
        assert_eq!(registry.find_by_id("V-1").map(|s| s.reading_count()), Some(0));
    }

    #[test]
    fn test_manual_reading_out_of_range() {
        let script = "1\nT-1\nLab\n4\nT-1\n1e39\n2\nP-1\nRoof\n4\nP-1\n1e12\n8\n";
        let (registry, output) = run_script(script);
        assert_eq!(output.matches("Invalid value!").count(), 2);
        assert_eq!(registry.find_by_id("T-1").map(|s| s.reading_count()), Some(0));
        assert_eq!(registry.find_by_id("P-1").map(|s| s.reading_count()), Some(0));
    }

    #[test]
    fn test_empty_registry_reports() {
        let (_, output) = run_script("6\n7\n8\n");
        assert_eq!(output.matches("No sensors registered").count(), 2);
    }

    #[test]
    fn test_simulation_provisions_device_sensors() {
        let (registry, output) = run_script("5\n8\n");

        let total: usize = registry.iter().map(|s| s.reading_count()).sum();
        assert_eq!(total, 5);
        assert!(registry.iter().all(|s| s.location() == "Arduino"));
        assert_eq!(output.matches("  Received: ").count(), 5);
    }
}
