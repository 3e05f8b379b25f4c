// Integration tests for configuration loading and precedence

use learn_lld::config::{AppConfig, ConfigError, Overrides};
use learn_lld::logging;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.start_route, "/");
    assert!(!config.dark_mode);
    assert_eq!(config.run_delay(), Duration::from_millis(1000));
    assert_eq!(config.log_file, None);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_no_file_means_defaults() {
    let config = AppConfig::load_or_default(None).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("learn-lld.json");
    fs::write(&path, r#"{ "dark_mode": true, "run_delay_ms": 250 }"#).expect("write config");

    let config = AppConfig::load(&path).expect("load config");
    assert!(config.dark_mode);
    assert_eq!(config.run_delay_ms, 250);
    assert_eq!(config.start_route, "/");
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_cli_overrides_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("learn-lld.json");
    fs::write(
        &path,
        r#"{ "start_route": "/roadmap", "run_delay_ms": 250, "log_level": "warn" }"#,
    )
    .expect("write config");

    let config = AppConfig::load_or_default(Some(&path))
        .expect("load config")
        .merge(Overrides {
            start_route: Some("/patterns".to_string()),
            log_file: Some(PathBuf::from("run.log")),
            ..Overrides::default()
        });

    assert_eq!(config.start_route, "/patterns");
    assert_eq!(config.run_delay_ms, 250);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
}

#[test]
fn test_cli_can_turn_dark_mode_off() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("learn-lld.json");
    fs::write(&path, r#"{ "dark_mode": true }"#).expect("write config");
    let from_file = AppConfig::load_or_default(Some(&path)).expect("load config");
    assert!(from_file.dark_mode);

    let light = from_file.clone().merge(Overrides {
        dark_mode: Some(false),
        ..Overrides::default()
    });
    assert!(!light.dark_mode);

    let dark = AppConfig::default().merge(Overrides {
        dark_mode: Some(true),
        ..Overrides::default()
    });
    assert!(dark.dark_mode);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let config = AppConfig {
        dark_mode: true,
        ..AppConfig::default()
    };
    assert_eq!(config.clone().merge(Overrides::default()), config);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ dark_mode: yes").expect("write config");

    let err = AppConfig::load(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("extra.json");
    fs::write(&path, r#"{ "theme": "dark" }"#).expect("write config");

    assert!(matches!(
        AppConfig::load(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempdir().expect("tempdir");
    let err = AppConfig::load(&dir.path().join("absent.json")).expect_err("should fail");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_logging_disabled_without_file() {
    let enabled = logging::init(&AppConfig::default()).expect("init");
    assert!(!enabled);
}

#[test]
fn test_bad_log_level_is_rejected() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    assert!(logging::build_filter("learn_lld=loud").is_err());
}
