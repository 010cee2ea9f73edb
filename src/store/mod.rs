//! Record storage collaborator.
//!
//! # Data Flow
//! ```text
//! Logger construction:
//!     → Query::table("bundle").filter("bundle_id", key) → search → name
//!     → Query::table("logs_options").filter("bundle", source) → search → options
//!
//! Accepted log call:
//!     → Record (level, source, message, timestamp, user)
//!     → insert("logs") → RecordId
//! ```
//!
//! # Design Decisions
//! - The logger only sees the `RecordStore` trait, so tests substitute doubles
//! - Searches return every match in insertion order; callers take the first
//! - Insert failures are returned, never retried here

pub mod memory;
pub mod types;

pub use memory::InMemoryStore;
pub use types::{Query, Record, RecordId, StoreError, StoreResult};

/// Query and insert access to platform tables.
pub trait RecordStore: Send + Sync {
    /// Run an equality search and return all matching records.
    fn search(&self, query: &Query) -> StoreResult<Vec<Record>>;

    /// Insert a record and return the identifier assigned to it.
    fn insert(&self, table: &str, record: Record) -> StoreResult<RecordId>;

    /// First match of `query`, if any.
    fn find_first(&self, query: &Query) -> StoreResult<Option<Record>> {
        Ok(self.search(query)?.into_iter().next())
    }
}
