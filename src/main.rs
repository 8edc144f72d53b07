use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use sensor_fleet::report::{write_describe_json, write_describe_report, write_process_report};
use sensor_fleet::{AppConfig, Ingestor, Menu, ReadingSimulator, SensorRegistry};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// sensor-fleet - track temperature, pressure and vibration sensors
#[derive(Parser, Debug, Clone)]
#[command(name = "sensor-fleet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the device simulator (overrides the config file)
    #[arg(short = 's', long = "seed", value_name = "N")]
    seed: Option<u64>,

    /// Apply KIND:ID:VALUE lines from a file ("-" for stdin), print reports and exit
    #[arg(short = 'i', long = "ingest", value_name = "FILE")]
    ingest: Option<PathBuf>,

    /// Print sensor descriptions as JSON in ingest mode
    #[arg(long = "json", requires = "ingest")]
    json: bool,

    /// Write the effective configuration (including --seed) and exit
    #[arg(long = "save-config", conflicts_with = "ingest")]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting sensor-fleet v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) if cli.save_config && !path.exists() => AppConfig::default(),
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }),
    };

    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to_path(path)?,
            None => config.save()?,
        }
        info!("Configuration saved");
        return Ok(());
    }

    let ingestor = Ingestor::new(&config.ingest);
    info!(
        "New sensors are provisioned at '{}'",
        ingestor.provisioning_location()
    );

    if let Some(path) = &cli.ingest {
        return run_ingest(path, &ingestor, cli.json);
    }

    let simulator = ReadingSimulator::new(config.simulation.seed);
    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        ingestor,
        simulator,
        config.simulation.batch_size,
    );
    menu.run()?;

    info!("Exiting with {} sensors registered", menu.registry().len());
    Ok(())
}

/// Batch mode: apply every non-blank line, then report
fn run_ingest(path: &Path, ingestor: &Ingestor, json: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open ingest file {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut registry = SensorRegistry::new();
    let (mut applied, mut skipped) = (0usize, 0usize);

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match ingestor.apply_line(&mut registry, &line) {
            Ok(_) => applied += 1,
            Err(e) => {
                warn!("Line {}: {}", number + 1, e);
                skipped += 1;
            }
        }
    }
    info!("Ingest finished: {} applied, {} skipped", applied, skipped);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        write_describe_json(&mut out, &registry.describe_all())?;
    } else {
        write_process_report(&mut out, &registry.process_all())?;
        write_describe_report(&mut out, &registry.describe_all())?;
    }
    out.flush()?;
    Ok(())
}
