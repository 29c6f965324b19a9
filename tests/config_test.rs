//! Settings file tests
//!
//! Loading, saving and validation of the JSON settings file

use mcu_dashboard::config::Config;
use mcu_dashboard::error::McuError;
use mcu_dashboard::logging::LogFormat;
use mcu_dashboard_common::{InspectionResult, ParticipantKind, ResultFilter};
use tempfile::tempdir;

/// Missing file falls back to defaults
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("load failed");
    assert_eq!(config, Config::default());
    assert_eq!(config.result_filter().expect("filter"), ResultFilter::All);
}

/// Save then load returns the same settings
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_default_tab(ParticipantKind::Corporate);
    config.set_log_format(LogFormat::Json);
    config.default_result_filter = "Atensi".to_string();
    config.save_to(&path).expect("save failed");

    let loaded = Config::load_from(&path).expect("load failed");
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.result_filter().expect("filter"),
        ResultFilter::Only(InspectionResult::Atensi)
    );
}

/// Keys left out of the file keep their defaults
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_tab": "corporate" }"#).expect("write failed");

    let config = Config::load_from(&path).expect("load failed");
    assert_eq!(config.default_tab, ParticipantKind::Corporate);
    assert_eq!(config.upload_tick_ms, Config::default().upload_tick_ms);
}

/// Out-of-range upload step is rejected
#[test]
fn test_invalid_step_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "upload_step_percent": 0 }"#).expect("write failed");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, McuError::Config(_)));
}

/// Unknown result filter label is rejected
#[test]
fn test_invalid_result_filter_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_result_filter": "Sedang" }"#).expect("write failed");

    assert!(matches!(Config::load_from(&path), Err(McuError::Config(_))));
}

/// Broken JSON
#[test]
fn test_broken_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ default_tab").expect("write failed");

    assert!(matches!(Config::load_from(&path), Err(McuError::JsonParse(_))));
}
