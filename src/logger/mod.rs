//! Leveled logger bound to one transaction.
//!
//! # Data Flow
//! ```text
//! construction:
//!     TransactionSnapshot.bundle_id → bundle key → bundle table → source
//!     source → options table → LogOptions (first row, optional)
//!     LoggerOptions / LogConfig → level, background echo
//!
//! info / error / debug / warning:
//!     threshold check ──suppressed──▶ response(severity)
//!         │
//!         ▼
//!     join args with '\n'
//!     → background echo "<time> | <LEVEL> | source <source> | <message>"
//!     → insert LogRecord into the log table
//!     → id echo "<id> | <message>" unless options type is the passthrough value
//!     → response(severity)
//! ```
//!
//! # Design Decisions
//! - `response(severity)` is `false` only for ERROR, suppressed or not, so a
//!   caller can `return logger.error(..)`
//! - Missing bundle or options rows degrade to defaults, never errors
//! - Store failures propagate unchanged; the enclosing transaction decides
//! - A logger lives inside one transaction and is not shared across threads

mod error;
mod options;
mod record;

pub use error::{LogError, LogResult};
pub use options::{LogOptions, LoggerOptions};
pub use record::{fields, LogRecord};

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::config::{LogConfig, TableConfig};
use crate::console::{Clock, ConsoleSink, StdoutConsole, SystemClock};
use crate::context::TransactionSnapshot;
use crate::severity::{LevelSetting, Severity};
use crate::store::{Query, RecordStore};

/// Text written in place of an unresolved source.
pub const UNSET_SOURCE: &str = "undefined";

/// Field of the bundle table matched against the bundle key.
pub const BUNDLE_ID_FIELD: &str = "bundle_id";

/// Field of the bundle table holding the source name.
pub const BUNDLE_NAME_FIELD: &str = "name";

/// Writes leveled messages for one transaction into the log table.
pub struct Logger {
    store: Arc<dyn RecordStore>,
    console: Arc<dyn ConsoleSink>,
    clock: Arc<dyn Clock>,
    tables: TableConfig,
    transaction: TransactionSnapshot,
    source: Option<String>,
    options: Option<LogOptions>,
    level: LevelSetting,
    background_echo: bool,
    passthrough_type: i64,
}

impl Logger {
    /// Build a logger with the default configuration, echoing to stdout.
    pub fn new(
        store: Arc<dyn RecordStore>,
        transaction: TransactionSnapshot,
        options: LoggerOptions,
    ) -> LogResult<Self> {
        Self::with_config(store, transaction, options, &LogConfig::default())
    }

    /// Build a logger, resolving source and options from `store`.
    pub fn with_config(
        store: Arc<dyn RecordStore>,
        transaction: TransactionSnapshot,
        options: LoggerOptions,
        config: &LogConfig,
    ) -> LogResult<Self> {
        let tables = config.tables.clone();
        let source = resolve_source(store.as_ref(), &tables, &transaction)?;
        let log_options = match &source {
            Some(source) => resolve_options(store.as_ref(), &tables, source)?,
            None => None,
        };

        let level = options
            .level
            .unwrap_or_else(|| config.logger.level.clone());
        let background_echo = options
            .background_echo
            .or_else(|| log_options.as_ref().and_then(LogOptions::background_log))
            .unwrap_or(config.logger.background_echo);

        tracing::debug!(
            bundle_id = %transaction.bundle_id,
            source = source.as_deref().unwrap_or(UNSET_SOURCE),
            level = %level,
            background_echo,
            has_options = log_options.is_some(),
            "Logger configured"
        );

        Ok(Self {
            store,
            console: Arc::new(StdoutConsole),
            clock: Arc::new(SystemClock),
            tables,
            transaction,
            source,
            options: log_options,
            level,
            background_echo,
            passthrough_type: config.logger.passthrough_type,
        })
    }

    /// Replace the console sink.
    pub fn with_console(mut self, console: Arc<dyn ConsoleSink>) -> Self {
        self.console = console;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Override the resolved source.
    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    /// Override the threshold. Not validated; see [`LevelSetting::threshold`].
    pub fn set_level(&mut self, level: impl Into<LevelSetting>) {
        self.level = level.into();
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn level(&self) -> &LevelSetting {
        &self.level
    }

    pub fn options(&self) -> Option<&LogOptions> {
        self.options.as_ref()
    }

    pub fn transaction(&self) -> &TransactionSnapshot {
        &self.transaction
    }

    pub fn background_echo(&self) -> bool {
        self.background_echo
    }

    pub fn info(&self, args: &[&dyn Display]) -> LogResult<bool> {
        self.log(Severity::Info, args)
    }

    pub fn error(&self, args: &[&dyn Display]) -> LogResult<bool> {
        self.log(Severity::Error, args)
    }

    pub fn debug(&self, args: &[&dyn Display]) -> LogResult<bool> {
        self.log(Severity::Debug, args)
    }

    pub fn warning(&self, args: &[&dyn Display]) -> LogResult<bool> {
        self.log(Severity::Warning, args)
    }

    /// Log at a severity chosen at runtime.
    ///
    /// Returns `Ok(false)` for ERROR and `Ok(true)` otherwise, whether or not
    /// the message passed the threshold. `Err` only when the insert fails.
    pub fn log(&self, severity: Severity, args: &[&dyn Display]) -> LogResult<bool> {
        if !self.level.allows(severity) {
            tracing::trace!(
                severity = %severity,
                threshold = %self.level,
                "Message below threshold"
            );
            return Ok(response(severity));
        }

        let message = join_args(args);
        let source = self.source.as_deref().unwrap_or(UNSET_SOURCE);

        if self.background_echo {
            self.console.write_line(&format!(
                "{} | {} | source {} | {}",
                self.clock.timestamp(),
                severity.name(),
                source,
                message
            ));
        }

        let entry = LogRecord {
            level: severity,
            record: None,
            source: self.source.clone(),
            message,
            timestamp: self.clock.now_millis(),
            user: self.transaction.active_user.clone(),
        };
        let id = self.store.insert(&self.tables.log, entry.to_record())?;

        tracing::trace!(id = %id, severity = %severity, source, "Log record inserted");

        if self.echoes_record_id() {
            self.console.write_line(&format!("{} | {}", id, entry.message));
        }

        Ok(response(severity))
    }

    fn echoes_record_id(&self) -> bool {
        let passthrough = self.passthrough_type as f64;
        self.options.as_ref().and_then(LogOptions::kind) != Some(passthrough)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tables", &self.tables)
            .field("transaction", &self.transaction)
            .field("source", &self.source)
            .field("options", &self.options)
            .field("level", &self.level)
            .field("background_echo", &self.background_echo)
            .field("passthrough_type", &self.passthrough_type)
            .finish_non_exhaustive()
    }
}

/// `false` for ERROR so a log call can double as a failure return.
fn response(severity: Severity) -> bool {
    severity != Severity::Error
}

fn join_args(args: &[&dyn Display]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve_source(
    store: &dyn RecordStore,
    tables: &TableConfig,
    transaction: &TransactionSnapshot,
) -> LogResult<Option<String>> {
    let key = transaction.bundle_key();
    let query = Query::table(&tables.bundle).filter(BUNDLE_ID_FIELD, key);
    let source = store
        .find_first(&query)?
        .and_then(|row| row.get_str(BUNDLE_NAME_FIELD).map(str::to_string));

    if source.is_none() {
        tracing::debug!(
            bundle_key = key,
            table = %tables.bundle,
            "No bundle found; source left unset"
        );
    }
    Ok(source)
}

fn resolve_options(
    store: &dyn RecordStore,
    tables: &TableConfig,
    source: &str,
) -> LogResult<Option<LogOptions>> {
    let query = Query::table(&tables.log_options).filter(LogOptions::BUNDLE_FIELD, source);
    let options = store.find_first(&query)?.map(LogOptions::from_record);

    if options.is_none() {
        tracing::debug!(source, table = %tables.log_options, "No log options for source");
    }
    Ok(options)
}

/// Log at INFO with any number of `Display` arguments.
///
/// ```
/// use std::sync::Arc;
/// use txlog::{tx_info, InMemoryStore, Logger, LoggerOptions, MemoryConsole, TransactionSnapshot};
///
/// let store = Arc::new(InMemoryStore::new());
/// let transaction = TransactionSnapshot::new("app-1", "u1");
/// let logger = Logger::new(store.clone(), transaction, LoggerOptions::default())
///     .unwrap()
///     .with_console(Arc::new(MemoryConsole::new()));
///
/// assert!(tx_info!(logger, "started", 3).unwrap());
/// assert_eq!(store.count("logs"), 1);
/// ```
#[macro_export]
macro_rules! tx_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log at ERROR; evaluates to `Ok(false)` unless the insert fails.
#[macro_export]
macro_rules! tx_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! tx_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! tx_warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
