//! Loading logger configuration and fixtures from disk.

use std::sync::Arc;

use txlog::config::{load_config, ConfigError};
use txlog::{InMemoryStore, Logger, LoggerOptions, MemoryConsole, TransactionSnapshot};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("txlog_{}_{}", std::process::id(), name))
}

#[test]
fn test_config_drives_tables_and_defaults() {
    let config_path = temp_path("config.toml");
    std::fs::write(
        &config_path,
        r#"
        [tables]
        log = "audit_logs"

        [logger]
        level = 1
        passthrough_type = 5
        "#,
    )
    .unwrap();

    let fixtures_path = temp_path("fixtures.toml");
    std::fs::write(
        &fixtures_path,
        r#"
        [[bundle]]
        bundle_id = "reports"
        name = "Reports"

        [[logs_options]]
        bundle = "Reports"
        type = 5
        "#,
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    let store = InMemoryStore::load_fixtures(&fixtures_path).unwrap();
    let console = MemoryConsole::new();

    let logger = Logger::with_config(
        Arc::new(store.clone()),
        TransactionSnapshot::new("reports-2024-q1", "analyst"),
        LoggerOptions::default(),
        &config,
    )
    .unwrap()
    .with_console(Arc::new(console.clone()));

    assert_eq!(logger.source(), Some("Reports"));
    assert!(logger.info(&[&"below threshold"]).unwrap());
    assert!(!logger.error(&[&"kept"]).unwrap());

    assert_eq!(store.count("audit_logs"), 1);
    assert_eq!(store.count("logs"), 0);
    // Options type matches the configured passthrough value.
    assert!(console.lines().is_empty());

    std::fs::remove_file(&config_path).unwrap_or_default();
    std::fs::remove_file(&fixtures_path).unwrap_or_default();
}

#[test]
fn test_invalid_config_is_rejected() {
    let path = temp_path("invalid.toml");
    std::fs::write(&path, "[logger]\nlevel = \"verbose\"\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));

    std::fs::remove_file(&path).unwrap_or_default();
}
