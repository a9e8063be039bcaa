use super::*;

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            source: "sysfs".to_string(),
            sysfs_root: "/sys/class/power_supply".to_string(),
            battery_name: String::new(),
            static_values: StaticTelemetryConfig::default(),
        }
    }
}

impl Default for StaticTelemetryConfig {
    fn default() -> Self {
        Self {
            charge_state: -1,
            plugged_source: -1,
            level_percent: -1,
            health_code: -1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            console_level: None,
            file_level: None,
            file: "/tmp/leyden.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8712,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telemetry: TelemetryConfig::default(),
            logging: LoggingConfig::default(),
            web: WebConfig::default(),
        }
    }
}
