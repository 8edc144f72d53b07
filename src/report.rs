//! Console rendering of registry reports

use sensor_fleet_core::{Assessment, FleetReport, SensorDescription};
use std::io::{self, Write};

const NO_SENSORS: &str = "No sensors registered";

/// Write the result of `SensorRegistry::process_all`
pub fn write_process_report<W: Write>(
    out: &mut W,
    report: &FleetReport<Assessment>,
) -> io::Result<()> {
    let FleetReport::Sensors(assessments) = report else {
        return writeln!(out, "\n{}", NO_SENSORS);
    };

    writeln!(out, "\n=== Processing {} sensors ===", assessments.len())?;
    for assessment in assessments {
        writeln!(out, "\nSensor: {}", assessment.sensor_id)?;
        write!(out, "{}", assessment)?;
    }
    Ok(())
}

/// Write the result of `SensorRegistry::describe_all`
pub fn write_describe_report<W: Write>(
    out: &mut W,
    report: &FleetReport<SensorDescription>,
) -> io::Result<()> {
    let FleetReport::Sensors(descriptions) = report else {
        return writeln!(out, "\n{}", NO_SENSORS);
    };

    writeln!(out, "\n=== Registered sensors: {} ===", descriptions.len())?;
    for description in descriptions {
        write!(out, "\n{}", description)?;
    }
    Ok(())
}

/// Write the descriptions as a pretty JSON array (`[]` when empty)
pub fn write_describe_json<W: Write>(
    out: &mut W,
    report: &FleetReport<SensorDescription>,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report.entries())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_fleet_core::{Reading, SensorKind, Status};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_reports_only_print_notice() {
        let text = render(|out| write_process_report(out, &FleetReport::NoSensors));
        assert_eq!(text, "\nNo sensors registered\n");

        let text = render(|out| write_describe_report(out, &FleetReport::NoSensors));
        assert_eq!(text, "\nNo sensors registered\n");
    }

    #[test]
    fn test_process_report_lists_each_sensor() {
        let report = FleetReport::Sensors(vec![Assessment {
            sensor_id: "V-1".to_string(),
            kind: SensorKind::Vibration,
            average: Some(Reading::Integer(10)),
            status: Status::Normal,
        }]);

        let text = render(|out| write_process_report(out, &report));
        assert_eq!(
            text,
            "\n=== Processing 1 sensors ===\n\nSensor: V-1\n  Average: 10\n  Status: Normal\n"
        );
    }

    #[test]
    fn test_describe_json() {
        let report = FleetReport::Sensors(vec![SensorDescription {
            kind: SensorKind::Temperature,
            id: "T-9".to_string(),
            location: "Arduino".to_string(),
            readings: vec![Reading::Float(25.5)],
        }]);

        let mut buf = Vec::new();
        write_describe_json(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["id"], "T-9");
        assert_eq!(value[0]["readings"][0], 25.5);
    }
}
