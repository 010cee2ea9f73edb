//! Logger error definitions.

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by logger construction and log calls.
///
/// Only collaborator failures appear here; missing configuration rows and
/// odd thresholds are absorbed by defaults.
#[derive(Debug, Error)]
pub enum LogError {
    /// The record store failed during lookup or insert.
    #[error("Log store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;
