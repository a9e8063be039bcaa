//! Battery telemetry interpretation
//!
//! This module contains the core decision procedure of the service: turning a
//! raw battery snapshot, as reported by the platform power subsystem, into the
//! derived status record handed to callers. It is pure and total; unreported
//! fields flow through as sentinels rather than errors.

use serde::Serialize;

/// Sentinel meaning "field not reported by the platform"
pub const UNAVAILABLE: i32 = -1;

/// Charge state codes, matching the wrapped platform convention
pub mod charge_state {
    pub const UNKNOWN: i32 = 1;
    pub const CHARGING: i32 = 2;
    pub const DISCHARGING: i32 = 3;
    pub const NOT_CHARGING: i32 = 4;
    pub const FULL: i32 = 5;
}

/// External power source codes
pub mod plugged {
    pub const NONE: i32 = 0;
    pub const AC: i32 = 1;
    pub const USB: i32 = 2;
    pub const WIRELESS: i32 = 4;
}

/// Battery health codes
pub mod health {
    pub const UNKNOWN: i32 = 1;
    pub const GOOD: i32 = 2;
    pub const OVERHEAT: i32 = 3;
    pub const DEAD: i32 = 4;
    pub const OVER_VOLTAGE: i32 = 5;
    pub const UNSPECIFIED_FAILURE: i32 = 6;
    pub const COLD: i32 = 7;
}

/// Raw battery snapshot as normalized by a telemetry source
///
/// Every field uses [`UNAVAILABLE`] when the platform did not report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawBatteryTelemetry {
    /// Charge state code (see [`charge_state`])
    pub charge_state: i32,

    /// External power source code (see [`plugged`])
    pub plugged_source: i32,

    /// Battery level in percent, 0-100
    pub level_percent: i32,

    /// Battery health code (see [`health`])
    pub health_code: i32,
}

impl Default for RawBatteryTelemetry {
    fn default() -> Self {
        Self {
            charge_state: UNAVAILABLE,
            plugged_source: UNAVAILABLE,
            level_percent: UNAVAILABLE,
            health_code: UNAVAILABLE,
        }
    }
}

/// Derived battery status handed to callers
///
/// Field names serialize in camelCase to stay wire-compatible with existing
/// consumers of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedBatteryStatus {
    pub is_charging: bool,
    pub is_plugged: bool,
    /// True exactly when plugged in but not charging (charge-limiting
    /// policies on some devices report "discharging" while on external power)
    pub is_connected_not_charging: bool,
    /// Level passthrough, including the -1 sentinel
    pub battery_level: i32,
    pub battery_health: &'static str,
}

/// Health code to label table; codes not listed here fall through to "Unknown"
const HEALTH_LABELS: [(i32, &str); 6] = [
    (health::GOOD, "Good"),
    (health::OVERHEAT, "Overheat"),
    (health::DEAD, "Dead"),
    (health::OVER_VOLTAGE, "Over Voltage"),
    (health::UNSPECIFIED_FAILURE, "Unspecified Failure"),
    (health::COLD, "Cold"),
];

/// Map a health code to its human-readable label
pub fn health_label(code: i32) -> &'static str {
    HEALTH_LABELS
        .iter()
        .find(|&&(c, _)| c == code)
        .map_or("Unknown", |&(_, label)| label)
}

/// Derive the caller-facing status from a raw snapshot
///
/// Pure and deterministic. Plug detection trusts `plugged_source` alone; a
/// charging report with `plugged_source == 0` is passed through as-is rather
/// than flagged inconsistent.
pub fn interpret(raw: &RawBatteryTelemetry) -> DerivedBatteryStatus {
    let is_plugged = raw.plugged_source > 0;
    let is_charging =
        raw.charge_state == charge_state::CHARGING || raw.charge_state == charge_state::FULL;

    DerivedBatteryStatus {
        is_charging,
        is_plugged,
        is_connected_not_charging: is_plugged && !is_charging,
        battery_level: raw.level_percent,
        battery_health: health_label(raw.health_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charging_on_ac() {
        let raw = RawBatteryTelemetry {
            charge_state: charge_state::CHARGING,
            plugged_source: plugged::AC,
            level_percent: 76,
            health_code: health::GOOD,
        };
        let status = interpret(&raw);
        assert!(status.is_charging);
        assert!(status.is_plugged);
        assert!(!status.is_connected_not_charging);
        assert_eq!(status.battery_level, 76);
        assert_eq!(status.battery_health, "Good");
    }

    #[test]
    fn discharging_while_plugged_is_connected_not_charging() {
        let raw = RawBatteryTelemetry {
            charge_state: charge_state::DISCHARGING,
            plugged_source: plugged::AC,
            level_percent: 90,
            health_code: health::GOOD,
        };
        let status = interpret(&raw);
        assert!(!status.is_charging);
        assert!(status.is_plugged);
        assert!(status.is_connected_not_charging);
        assert_eq!(status.battery_level, 90);
    }

    #[test]
    fn unplugged_discharging() {
        let raw = RawBatteryTelemetry {
            charge_state: charge_state::DISCHARGING,
            plugged_source: plugged::NONE,
            level_percent: 45,
            health_code: health::COLD,
        };
        let status = interpret(&raw);
        assert!(!status.is_charging);
        assert!(!status.is_plugged);
        assert!(!status.is_connected_not_charging);
        assert_eq!(status.battery_level, 45);
        assert_eq!(status.battery_health, "Cold");
    }

    #[test]
    fn all_sentinels_degrade_to_defaults() {
        let status = interpret(&RawBatteryTelemetry::default());
        assert!(!status.is_charging);
        assert!(!status.is_plugged);
        assert!(!status.is_connected_not_charging);
        assert_eq!(status.battery_level, -1);
        assert_eq!(status.battery_health, "Unknown");
    }

    #[test]
    fn full_counts_as_charging() {
        let raw = RawBatteryTelemetry {
            charge_state: charge_state::FULL,
            plugged_source: plugged::USB,
            level_percent: 100,
            health_code: health::GOOD,
        };
        let status = interpret(&raw);
        assert!(status.is_charging);
        assert!(!status.is_connected_not_charging);
    }

    #[test]
    fn charging_report_while_unplugged_is_not_flagged() {
        // The platform may never produce this, but if it does we trust
        // plugged_source for plug detection and pass the rest through.
        let raw = RawBatteryTelemetry {
            charge_state: charge_state::CHARGING,
            plugged_source: plugged::NONE,
            level_percent: 50,
            health_code: health::GOOD,
        };
        let status = interpret(&raw);
        assert!(status.is_charging);
        assert!(!status.is_plugged);
        assert!(!status.is_connected_not_charging);
    }

    #[test]
    fn connected_not_charging_is_always_the_derived_conjunction() {
        let charge_codes = [
            UNAVAILABLE,
            charge_state::UNKNOWN,
            charge_state::CHARGING,
            charge_state::DISCHARGING,
            charge_state::NOT_CHARGING,
            charge_state::FULL,
        ];
        let plug_codes = [
            UNAVAILABLE,
            plugged::NONE,
            plugged::AC,
            plugged::USB,
            plugged::WIRELESS,
        ];
        for cs in charge_codes {
            for ps in plug_codes {
                let status = interpret(&RawBatteryTelemetry {
                    charge_state: cs,
                    plugged_source: ps,
                    level_percent: 50,
                    health_code: health::GOOD,
                });
                assert_eq!(
                    status.is_connected_not_charging,
                    status.is_plugged && !status.is_charging,
                    "charge_state={cs} plugged_source={ps}"
                );
                assert_eq!(status.is_plugged, ps > 0);
                assert_eq!(
                    status.is_charging,
                    cs == charge_state::CHARGING || cs == charge_state::FULL
                );
            }
        }
    }

    #[test]
    fn unknown_health_codes_map_to_unknown() {
        for code in [UNAVAILABLE, 0, 8, 42, i32::MAX] {
            assert_eq!(health_label(code), "Unknown");
        }
        assert_eq!(health_label(health::OVER_VOLTAGE), "Over Voltage");
        assert_eq!(health_label(health::UNSPECIFIED_FAILURE), "Unspecified Failure");
    }

    #[test]
    fn interpretation_is_idempotent() {
        let raw = RawBatteryTelemetry {
            charge_state: charge_state::NOT_CHARGING,
            plugged_source: plugged::WIRELESS,
            level_percent: 33,
            health_code: health::OVERHEAT,
        };
        assert_eq!(interpret(&raw), interpret(&raw));
    }

    #[test]
    fn status_serializes_with_bridge_field_names() {
        let status = interpret(&RawBatteryTelemetry::default());
        let json = serde_json::to_value(status).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "batteryHealth",
                "batteryLevel",
                "isCharging",
                "isConnectedNotCharging",
                "isPlugged"
            ]
        );
    }
}
