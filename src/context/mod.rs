//! Transaction context handed to a logger at construction.
//!
//! # Responsibilities
//! - Carry the read-only snapshot of the surrounding unit of work
//! - Derive the logical bundle key from the dash-delimited bundle id
//!
//! The snapshot is cloned into the logger; the caller keeps ownership of its
//! own transaction state.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the transaction a logger runs inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSnapshot {
    /// Dash-delimited bundle identifier, e.g. `"billing-7f3a-2"`.
    pub bundle_id: String,

    /// Identifier of the acting user.
    pub active_user: String,
}

impl TransactionSnapshot {
    pub fn new(bundle_id: impl Into<String>, active_user: impl Into<String>) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            active_user: active_user.into(),
        }
    }

    /// First `-` segment of the bundle id.
    pub fn bundle_key(&self) -> &str {
        self.bundle_id.split('-').next().unwrap_or_default()
    }
}
