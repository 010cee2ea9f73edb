//! Threshold, persistence, and return-value behavior of `Logger`.

use std::sync::Arc;

use txlog::{
    tx_error, tx_info, LevelSetting, LogError, LogRecord, LoggerOptions, Record, Severity,
    StoreError,
};

mod common;

use common::{billing_store, build_logger, FailingStore, RecordingStore, UnreachableStore};

fn expected_response(severity: Severity) -> bool {
    severity != Severity::Error
}

#[test]
fn test_suppressed_calls_never_persist() {
    for threshold in 0u8..=4 {
        for severity in Severity::ALL {
            if threshold >= severity.ordinal() {
                continue;
            }
            let store = Arc::new(RecordingStore::default());
            let options = LoggerOptions::default()
                .level(threshold)
                .background_echo(true);
            let (logger, console) = build_logger(store.clone(), options);

            let response = logger.log(severity, &[&"hidden"]).unwrap();

            assert_eq!(response, expected_response(severity), "{severity} at {threshold}");
            assert_eq!(store.insert_count(), 0, "{severity} at {threshold}");
            assert!(console.lines().is_empty());
        }
    }
}

#[test]
fn test_passing_calls_persist_once_with_level() {
    for threshold in 1u8..=4 {
        for severity in Severity::ALL {
            if threshold < severity.ordinal() {
                continue;
            }
            let store = Arc::new(RecordingStore::default());
            let options = LoggerOptions::default().level(threshold);
            let (logger, _) = build_logger(store.clone(), options);

            let response = logger.log(severity, &[&"shown"]).unwrap();

            assert_eq!(response, expected_response(severity));
            assert_eq!(store.insert_count(), 1);
            let (table, row) = store.last_insert().unwrap();
            assert_eq!(table, "logs");
            assert_eq!(LogRecord::from_record(&row).unwrap().level, severity);
        }
    }
}

#[test]
fn test_named_operations_return_contract() {
    for level in [1u8, 4] {
        let store = Arc::new(RecordingStore::default());
        let (logger, _) = build_logger(store, LoggerOptions::default().level(level));

        assert!(!logger.error(&[&"e"]).unwrap());
        assert!(logger.warning(&[&"w"]).unwrap());
        assert!(logger.info(&[&"i"]).unwrap());
        assert!(logger.debug(&[&"d"]).unwrap());
    }
}

#[test]
fn test_arguments_join_with_newline() {
    let store = Arc::new(RecordingStore::default());
    let (logger, _) = build_logger(store.clone(), LoggerOptions::default());

    logger.info(&[&"a", &"b"]).unwrap();

    let (_, row) = store.last_insert().unwrap();
    assert_eq!(row.get_str("message"), Some("a\nb"));
}

#[test]
fn test_default_threshold_is_info() {
    let store = Arc::new(RecordingStore::default());
    let (logger, _) = build_logger(store.clone(), LoggerOptions::default());

    assert_eq!(logger.level().threshold(), 3.0);
    assert!(logger.debug(&[&"skip"]).unwrap());
    assert_eq!(store.insert_count(), 0);
    assert!(logger.info(&[&"keep"]).unwrap());
    assert_eq!(store.insert_count(), 1);
}

#[test]
fn test_error_only_suppresses_warning() {
    let store = Arc::new(RecordingStore::default());
    let (mut logger, _) = build_logger(store.clone(), LoggerOptions::default());

    logger.set_level(1);
    assert!(logger.warning(&[&"x"]).unwrap());
    assert_eq!(store.insert_count(), 0);

    assert!(!tx_error!(logger, "y").unwrap());
    assert_eq!(store.insert_count(), 1);
}

#[test]
fn test_numeric_string_level_is_coerced_at_compare_time() {
    let store = Arc::new(RecordingStore::default());
    let (mut logger, _) = build_logger(store.clone(), LoggerOptions::default());

    logger.set_level("2");
    assert_eq!(logger.level(), &LevelSetting::Text("2".into()));
    logger.info(&[&"no"]).unwrap();
    logger.warning(&[&"yes"]).unwrap();
    assert_eq!(store.insert_count(), 1);

    logger.set_level("not a number");
    logger.info(&[&"fallback to info"]).unwrap();
    logger.debug(&[&"still hidden"]).unwrap();
    assert_eq!(store.insert_count(), 2);
}

#[test]
fn test_empty_store_construction_uses_defaults() {
    let store = Arc::new(RecordingStore::default());
    let (logger, console) = build_logger(store.clone(), LoggerOptions::default());

    assert_eq!(logger.source(), None);
    assert!(logger.options().is_none());
    assert!(tx_info!(logger, "hello").unwrap());

    let (_, row) = store.last_insert().unwrap();
    let entry = LogRecord::from_record(&row).unwrap();
    assert_eq!(entry.source, None);
    assert_eq!(entry.user, "u-42");
    // No options row: the id echo is still written.
    assert_eq!(console.lines().len(), 1);
}

#[test]
fn test_background_echo_off_writes_no_echo_line() {
    let store = Arc::new(billing_store(Some(1)));
    let (logger, console) = build_logger(store, LoggerOptions::default());

    logger.info(&[&"quiet"]).unwrap();
    logger.error(&[&"loud"]).unwrap();
    assert!(console.lines().is_empty());
}

#[test]
fn test_background_echo_on_writes_one_line_per_accepted_call() {
    let store = Arc::new(billing_store(Some(1)));
    let (logger, console) = build_logger(store, LoggerOptions::default().background_echo(true));

    logger.warning(&[&"first"]).unwrap();
    logger.debug(&[&"suppressed"]).unwrap();
    logger.error(&[&"second"]).unwrap();

    let lines = console.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("| WARNING |"));
    assert!(lines[0].contains("source Billing"));
    assert!(lines[1].contains("| ERROR |"));
    assert!(lines[1].ends_with("| second"));
}

#[test]
fn test_id_echo_is_gated_separately() {
    let store = Arc::new(billing_store(Some(2)));
    let options = LoggerOptions::default().background_echo(true);
    let (logger, console) = build_logger(store.clone(), options);

    logger.info(&[&"both"]).unwrap();

    let lines = console.lines();
    assert_eq!(lines.len(), 2);
    let id = store.inner.records("logs")[0].get_str("id").unwrap().to_string();
    assert_eq!(lines[1], format!("{id} | both"));
}

#[test]
fn test_passthrough_type_compares_numerically() {
    let cases: [(serde_json::Value, usize); 3] = [
        (serde_json::json!(1), 0),
        (serde_json::json!(1.0), 0),
        (serde_json::json!("1"), 1),
    ];

    for (kind, expected_lines) in cases {
        let store = Arc::new(billing_store(None));
        store.inner.seed(
            "logs_options",
            vec![Record::new().with("bundle", "Billing").with("type", kind.clone())],
        );
        let (logger, console) = build_logger(store, LoggerOptions::default());

        logger.info(&[&"msg"]).unwrap();
        assert_eq!(console.lines().len(), expected_lines, "type {kind}");
    }
}

#[test]
fn test_insert_failure_propagates() {
    let (logger, console) = build_logger(Arc::new(FailingStore), LoggerOptions::default());

    let err = logger.info(&[&"lost"]).unwrap_err();
    assert!(matches!(
        err,
        LogError::Store(StoreError::InsertRejected { ref table, .. }) if table == "logs"
    ));
    assert!(console.lines().is_empty());

    // Suppressed calls never reach the store.
    assert!(logger.debug(&[&"skipped"]).unwrap());
}

#[test]
fn test_lookup_failure_propagates_from_construction() {
    let result = txlog::Logger::new(
        Arc::new(UnreachableStore),
        txlog::TransactionSnapshot::new("billing-1", "u"),
        LoggerOptions::default(),
    );
    assert!(matches!(result, Err(LogError::Store(StoreError::Unavailable(_)))));
}

#[test]
fn test_options_lookup_uses_resolved_source() {
    let store = Arc::new(billing_store(Some(7)));
    let (logger, _) = build_logger(store.clone(), LoggerOptions::default());

    assert_eq!(logger.source(), Some("Billing"));
    assert_eq!(logger.options().and_then(|o| o.kind()), Some(7.0));
    assert_eq!(store.searches.load(std::sync::atomic::Ordering::SeqCst), 2);
}
