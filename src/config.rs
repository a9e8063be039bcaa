//! Configuration management for Leyden
//!
//! This module handles loading, validation, and management of the application
//! configuration from YAML files.

use crate::error::{LeydenError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod defaults;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Telemetry source configuration
    pub telemetry: TelemetryConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Web server binding configuration
    pub web: WebConfig,
}

/// Telemetry source selection and parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Source kind (sysfs or static)
    pub source: String,

    /// Root of the power-supply class tree for the sysfs source
    pub sysfs_root: String,

    /// Battery supply name; empty means auto-detect the first battery
    pub battery_name: String,

    /// Fixed snapshot served by the static source
    pub static_values: StaticTelemetryConfig,
}

/// Fixed raw telemetry values for the static source
///
/// Defaults to all sentinels, the same shape the platform reports when no
/// battery snapshot is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTelemetryConfig {
    /// Charge state code
    pub charge_state: i32,

    /// External power source code
    pub plugged_source: i32,

    /// Battery level in percent
    pub level_percent: i32,

    /// Battery health code
    pub health_code: i32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Optional console-specific level override
    pub console_level: Option<String>,

    /// Optional file-specific level override
    pub file_level: Option<String>,

    /// Path to log file
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Bind address
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        let default_paths = [
            "leyden_config.yaml",
            "/data/leyden_config.yaml",
            "/etc/leyden/config.yaml",
        ];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.telemetry.source.as_str() {
            "sysfs" => {
                if self.telemetry.sysfs_root.is_empty() {
                    return Err(LeydenError::validation(
                        "telemetry.sysfs_root",
                        "Path cannot be empty for the sysfs source",
                    ));
                }
            }
            "static" => {
                let level = self.telemetry.static_values.level_percent;
                if !(-1..=100).contains(&level) {
                    return Err(LeydenError::validation(
                        "telemetry.static_values.level_percent",
                        "Level must be -1 or within 0-100",
                    ));
                }
            }
            other => {
                return Err(LeydenError::Validation {
                    field: "telemetry.source".to_string(),
                    message: format!("Unknown telemetry source '{}'", other),
                });
            }
        }

        if self.web.host.is_empty() {
            return Err(LeydenError::validation(
                "web.host",
                "Bind address cannot be empty",
            ));
        }

        if self.web.port == 0 {
            return Err(LeydenError::validation(
                "web.port",
                "Port must be greater than 0",
            ));
        }

        Ok(())
    }
}
