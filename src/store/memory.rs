//! In-process record store with snapshot persistence.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::store::types::{Query, Record, RecordId, StoreError, StoreResult};
use crate::store::RecordStore;

/// Field holding the assigned id on stored rows.
pub const ID_FIELD: &str = "id";

/// A thread-safe, in-memory table store.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<DashMap<String, Vec<Record>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows to a table without assigning ids.
    pub fn seed(&self, table: &str, records: impl IntoIterator<Item = Record>) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .extend(records);
    }

    /// Build a store from a TOML fixture where each array of tables is a table:
    ///
    /// ```toml
    /// [[bundle]]
    /// bundle_id = "billing"
    /// name = "Billing"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let tables: BTreeMap<String, Vec<Record>> = toml::from_str(content)?;
        let store = Self::new();
        for (table, records) in tables {
            store.seed(&table, records);
        }
        Ok(store)
    }

    /// Load a TOML fixture from disk.
    pub fn load_fixtures(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    /// Rows of a table, in insertion order.
    pub fn records(&self, table: &str) -> Vec<Record> {
        self.tables
            .get(table)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    /// Number of rows in a table.
    pub fn count(&self, table: &str) -> usize {
        self.tables.get(table).map(|r| r.len()).unwrap_or(0)
    }

    /// Copy of every table.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<Record>> {
        self.tables
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }

    /// Write all tables to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> StoreResult<()> {
        let writer = BufWriter::new(File::create(path)?);
        let snapshot = self.snapshot();
        serde_json::to_writer_pretty(writer, &snapshot)?;
        tracing::info!(path = %path.display(), tables = snapshot.len(), "Saved store snapshot");
        Ok(())
    }

    /// Read tables back from a JSON snapshot.
    pub fn load_from_file(path: &Path) -> StoreResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let tables: BTreeMap<String, Vec<Record>> = serde_json::from_reader(reader)?;
        let store = Self::new();
        for (table, records) in tables {
            store.seed(&table, records);
        }
        tracing::info!(
            path = %path.display(),
            tables = store.tables.len(),
            "Loaded store snapshot"
        );
        Ok(store)
    }
}

impl RecordStore for InMemoryStore {
    fn search(&self, query: &Query) -> StoreResult<Vec<Record>> {
        let Some(rows) = self.tables.get(query.table_name()) else {
            return Ok(Vec::new());
        };
        Ok(rows.iter().filter(|r| query.matches(r)).cloned().collect())
    }

    fn insert(&self, table: &str, mut record: Record) -> StoreResult<RecordId> {
        let id = RecordId(Uuid::new_v4().to_string());
        record.set(ID_FIELD, id.0.clone());
        self.tables.entry(table.to_string()).or_default().push(record);
        Ok(id)
    }
}
