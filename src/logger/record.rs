//! The persisted log row.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;
use crate::store::{Record, RecordId};

/// Field names of a log row.
pub mod fields {
    pub const LEVEL: &str = "level";
    pub const RECORD: &str = "record";
    pub const SOURCE: &str = "source";
    pub const MESSAGE: &str = "message";
    pub const TIMESTAMP: &str = "timestamp";
    pub const USER: &str = "user";
}

/// One accepted log call, as written to the log table.
///
/// Created once per accepted call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: Severity,

    /// Associated platform record. No code path sets it yet, so it is
    /// always `None` for rows written by [`crate::Logger`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordId>,

    /// Resolved source; `None` when no bundle matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Arguments joined with `\n`.
    pub message: String,

    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,

    /// Acting user from the transaction snapshot.
    pub user: String,
}

impl LogRecord {
    /// Row representation handed to the store.
    pub fn to_record(&self) -> Record {
        let mut row = Record::new()
            .with(fields::LEVEL, self.level.ordinal())
            .with(fields::MESSAGE, self.message.clone())
            .with(fields::TIMESTAMP, self.timestamp)
            .with(fields::USER, self.user.clone());
        if let Some(record) = &self.record {
            row.set(fields::RECORD, record.0.clone());
        }
        if let Some(source) = &self.source {
            row.set(fields::SOURCE, source.clone());
        }
        row
    }

    /// Read a stored row back. `None` if a required field is missing or the
    /// level is not a known ordinal.
    pub fn from_record(row: &Record) -> Option<Self> {
        let level = u8::try_from(row.get_i64(fields::LEVEL)?).ok()?;
        Some(Self {
            level: Severity::from_ordinal(level)?,
            record: row.get_str(fields::RECORD).map(RecordId::from),
            source: row.get_str(fields::SOURCE).map(str::to_string),
            message: row.get_str(fields::MESSAGE)?.to_string(),
            timestamp: row.get_i64(fields::TIMESTAMP)?,
            user: row.get_str(fields::USER)?.to_string(),
        })
    }
}
