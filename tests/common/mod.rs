//! Shared store doubles for logger integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use txlog::store::{Query, Record, RecordId, RecordStore, StoreError, StoreResult};
use txlog::{FixedClock, InMemoryStore, Logger, LoggerOptions, MemoryConsole, TransactionSnapshot};

/// Wraps an `InMemoryStore` and records every insert.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: InMemoryStore,
    pub inserts: Mutex<Vec<(String, Record)>>,
    pub searches: AtomicUsize,
}

impl RecordingStore {
    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }

    pub fn last_insert(&self) -> Option<(String, Record)> {
        self.inserts.lock().unwrap().last().cloned()
    }
}

impl RecordStore for RecordingStore {
    fn search(&self, query: &Query) -> StoreResult<Vec<Record>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search(query)
    }

    fn insert(&self, table: &str, record: Record) -> StoreResult<RecordId> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), record.clone()));
        self.inner.insert(table, record)
    }
}

/// Searches succeed with no rows; every insert fails.
pub struct FailingStore;

impl RecordStore for FailingStore {
    fn search(&self, _query: &Query) -> StoreResult<Vec<Record>> {
        Ok(Vec::new())
    }

    fn insert(&self, table: &str, _record: Record) -> StoreResult<RecordId> {
        Err(StoreError::InsertRejected {
            table: table.to_string(),
            reason: "read-only replica".to_string(),
        })
    }
}

/// Every call fails.
#[allow(dead_code)]
pub struct UnreachableStore;

impl RecordStore for UnreachableStore {
    fn search(&self, _query: &Query) -> StoreResult<Vec<Record>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn insert(&self, _table: &str, _record: Record) -> StoreResult<RecordId> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Logger for transaction `billing-7f3a` / user `u-42` with a captured console.
#[allow(dead_code)]
pub fn build_logger(
    store: Arc<dyn RecordStore>,
    options: LoggerOptions,
) -> (Logger, MemoryConsole) {
    let console = MemoryConsole::new();
    let logger = Logger::new(store, TransactionSnapshot::new("billing-7f3a", "u-42"), options)
        .unwrap()
        .with_console(Arc::new(console.clone()))
        .with_clock(Arc::new(FixedClock::at_millis(1_700_000_000_000)));
    (logger, console)
}

/// Bundle `billing` named `Billing`, optionally with an options row.
#[allow(dead_code)]
pub fn billing_store(options_type: Option<i64>) -> RecordingStore {
    let store = RecordingStore::default();
    store.inner.seed(
        "bundle",
        vec![Record::new().with("bundle_id", "billing").with("name", "Billing")],
    );
    if let Some(kind) = options_type {
        store.inner.seed(
            "logs_options",
            vec![Record::new().with("bundle", "Billing").with("type", kind)],
        );
    }
    store
}
