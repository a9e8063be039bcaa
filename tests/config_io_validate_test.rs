use leyden::config::Config;
use std::fs;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.telemetry.battery_name = "BAT1".to_string();
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.telemetry.battery_name, "BAT1");
    assert_eq!(loaded.logging.file, cfg.logging.file);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();

    // Unknown telemetry source
    cfg.telemetry.source = "upower".to_string();
    assert!(cfg.validate().is_err());

    // Empty sysfs root
    cfg = Config::default();
    cfg.telemetry.sysfs_root.clear();
    assert!(cfg.validate().is_err());

    // Empty bind address
    cfg = Config::default();
    cfg.web.host.clear();
    assert!(cfg.validate().is_err());

    // Invalid port
    cfg = Config::default();
    cfg.web.port = 0;
    assert!(cfg.validate().is_err());

    // Static level out of range
    cfg = Config::default();
    cfg.telemetry.source = "static".to_string();
    cfg.telemetry.static_values.level_percent = -2;
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"telemetry:\n  source: static\n").unwrap();
    let cfg = Config::from_file(tmp.path()).unwrap();
    assert_eq!(cfg.telemetry.source, "static");
    assert_eq!(cfg.web.host, "127.0.0.1");
    assert_eq!(cfg.telemetry.static_values.charge_state, -1);
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Serialization error"));
}
