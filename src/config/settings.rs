//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sensor_fleet_core::constants::DEFAULT_PROVISIONING_LOCATION;

/// Application-wide configuration
///
/// Alert thresholds are fixed per sensor kind and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Reading simulator settings
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Ingest settings
    #[serde(default)]
    pub ingest: IngestConfig,
}

fn default_version() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from disk
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "sensor-fleet", "sensor-fleet")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            simulation: SimulationConfig::default(),
            ingest: IngestConfig::default(),
        }
    }
}

/// Reading simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lines generated per "simulate" menu action
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Fixed seed for reproducible runs (None = seed from entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_batch_size() -> usize {
    5
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            seed: None,
        }
    }
}

/// Ingest configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Location given to sensors created on first sight
    #[serde(default = "default_provisioning_location")]
    pub provisioning_location: String,
}

fn default_provisioning_location() -> String {
    DEFAULT_PROVISIONING_LOCATION.to_string()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            provisioning_location: default_provisioning_location(),
        }
    }
}
