//! Battery telemetry acquisition
//!
//! Sources here are responsible for querying the operating environment's
//! current battery snapshot and normalizing it into the integer fields of
//! [`RawBatteryTelemetry`]. Acquisition failures degrade to sentinel values,
//! mirroring the platform behavior of reporting defaults when no battery
//! broadcast is available; a source only errors when it cannot run at all.

use crate::battery::{RawBatteryTelemetry, UNAVAILABLE, charge_state, health, plugged};
use crate::config::{Config, StaticTelemetryConfig};
use crate::error::{LeydenError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A provider of raw battery snapshots
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Take a fresh snapshot of the current battery state
    async fn sample(&self) -> Result<RawBatteryTelemetry>;

    /// Short identifier for logs and the status endpoint
    fn kind(&self) -> &'static str;
}

/// Build the telemetry source selected by the configuration
pub fn build_source(config: &Config) -> Result<Arc<dyn TelemetrySource>> {
    match config.telemetry.source.as_str() {
        "sysfs" => Ok(Arc::new(SysfsTelemetrySource::new(
            &config.telemetry.sysfs_root,
            &config.telemetry.battery_name,
        ))),
        "static" => Ok(Arc::new(StaticTelemetrySource::new(
            &config.telemetry.static_values,
        ))),
        other => Err(LeydenError::config(format!(
            "Unknown telemetry source '{}'",
            other
        ))),
    }
}

/// Source serving a fixed snapshot from configuration
///
/// Used on hosts without a battery and in tests.
pub struct StaticTelemetrySource {
    snapshot: RawBatteryTelemetry,
}

impl StaticTelemetrySource {
    pub fn new(values: &StaticTelemetryConfig) -> Self {
        Self {
            snapshot: RawBatteryTelemetry {
                charge_state: values.charge_state,
                plugged_source: values.plugged_source,
                level_percent: values.level_percent,
                health_code: values.health_code,
            },
        }
    }
}

#[async_trait]
impl TelemetrySource for StaticTelemetrySource {
    async fn sample(&self) -> Result<RawBatteryTelemetry> {
        Ok(self.snapshot)
    }

    fn kind(&self) -> &'static str {
        "static"
    }
}

/// Source reading the Linux power-supply class tree
///
/// Reads the battery supply's `status`, `capacity`, and `health` attributes
/// and derives the plugged-source code from the online state of mains, USB,
/// and wireless supplies. Unreadable attributes yield sentinels.
pub struct SysfsTelemetrySource {
    root: PathBuf,
    battery_name: String,
}

impl SysfsTelemetrySource {
    pub fn new<P: AsRef<Path>>(root: P, battery_name: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            battery_name: battery_name.to_string(),
        }
    }

    /// Locate the battery supply directory, by configured name or auto-detect
    fn battery_dir(&self) -> Option<PathBuf> {
        if !self.battery_name.is_empty() {
            let dir = self.root.join(&self.battery_name);
            return dir.is_dir().then_some(dir);
        }

        for dir in sorted_supply_dirs(&self.root) {
            if read_trimmed(&dir.join("type")).as_deref() == Some("Battery") {
                return Some(dir);
            }
        }
        None
    }

    /// Derive the plugged-source code from non-battery supplies
    ///
    /// AC wins over USB, USB over wireless, matching the single-code
    /// convention of the wrapped platform.
    fn plugged_code(&self) -> i32 {
        if !self.root.is_dir() {
            return UNAVAILABLE;
        }

        let mut code = plugged::NONE;
        for dir in sorted_supply_dirs(&self.root) {
            if read_trimmed(&dir.join("online")).as_deref() != Some("1") {
                continue;
            }
            let supply_type = match read_trimmed(&dir.join("type")) {
                Some(t) => t,
                None => continue,
            };
            let candidate = match supply_type.as_str() {
                "Mains" => plugged::AC,
                "USB" => plugged::USB,
                "Wireless" => plugged::WIRELESS,
                _ => continue,
            };
            if plugged_rank(candidate) > plugged_rank(code) {
                code = candidate;
            }
        }
        code
    }
}

fn plugged_rank(code: i32) -> u8 {
    match code {
        plugged::AC => 3,
        plugged::USB => 2,
        plugged::WIRELESS => 1,
        _ => 0,
    }
}

#[async_trait]
impl TelemetrySource for SysfsTelemetrySource {
    async fn sample(&self) -> Result<RawBatteryTelemetry> {
        let plugged_source = self.plugged_code();

        let Some(battery) = self.battery_dir() else {
            // No battery supply present; report the unplugged state we could
            // still observe and sentinels for the rest
            return Ok(RawBatteryTelemetry {
                plugged_source,
                ..RawBatteryTelemetry::default()
            });
        };

        let charge_state = read_trimmed(&battery.join("status"))
            .map_or(UNAVAILABLE, |text| charge_state_code(&text));
        let level_percent = read_trimmed(&battery.join("capacity"))
            .and_then(|text| text.parse::<i32>().ok())
            .unwrap_or(UNAVAILABLE);
        let health_code =
            read_trimmed(&battery.join("health")).map_or(UNAVAILABLE, |text| health_code(&text));

        Ok(RawBatteryTelemetry {
            charge_state,
            plugged_source,
            level_percent,
            health_code,
        })
    }

    fn kind(&self) -> &'static str {
        "sysfs"
    }
}

/// Supply directories under the class root, sorted by name for determinism
fn sorted_supply_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = match std::fs::read_dir(root) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect(),
        Err(_) => Vec::new(),
    };
    dirs.sort();
    dirs
}

fn read_trimmed(path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Map a sysfs status string to the platform charge-state code
fn charge_state_code(text: &str) -> i32 {
    match text {
        "Charging" => charge_state::CHARGING,
        "Discharging" => charge_state::DISCHARGING,
        "Not charging" => charge_state::NOT_CHARGING,
        "Full" => charge_state::FULL,
        "Unknown" => charge_state::UNKNOWN,
        _ => UNAVAILABLE,
    }
}

/// Map a sysfs health string to the platform health code
fn health_code(text: &str) -> i32 {
    match text {
        "Good" => health::GOOD,
        "Overheat" => health::OVERHEAT,
        "Dead" => health::DEAD,
        "Over voltage" => health::OVER_VOLTAGE,
        "Unspecified failure" => health::UNSPECIFIED_FAILURE,
        "Cold" => health::COLD,
        "Unknown" => health::UNKNOWN,
        _ => UNAVAILABLE,
    }
}
