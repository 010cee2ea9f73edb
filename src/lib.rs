//! Leveled transaction logging.
//!
//! A [`Logger`] is built for one unit of work from a [`TransactionSnapshot`].
//! It resolves its source from the bundle table, filters messages by a
//! severity threshold, writes accepted messages as [`LogRecord`] rows through
//! a [`RecordStore`], and can mirror them to a [`ConsoleSink`].
//!
//! ```text
//!   caller ──info/error/debug/warning──▶ Logger
//!                                          │ threshold
//!                                          ▼
//!                         ConsoleSink ◀── format ──▶ RecordStore (logs)
//! ```

pub mod config;
pub mod console;
pub mod context;
pub mod logger;
pub mod severity;
pub mod store;

pub use config::LogConfig;
pub use console::{
    Clock, ConsoleSink, FixedClock, MemoryConsole, StdoutConsole, SystemClock, TracingConsole,
};
pub use context::TransactionSnapshot;
pub use logger::{LogError, LogOptions, LogRecord, LogResult, Logger, LoggerOptions};
pub use severity::{LevelSetting, Severity};
pub use store::{InMemoryStore, Query, Record, RecordId, RecordStore, StoreError};
