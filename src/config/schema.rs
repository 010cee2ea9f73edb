//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::severity::LevelSetting;

/// Root configuration for loggers built by one process.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Platform tables the logger reads and writes.
    pub tables: TableConfig,

    /// Defaults applied to every logger.
    pub logger: LoggerConfig,
}

/// Table names used by the logger.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Table receiving log records.
    pub log: String,

    /// Per-source logging options.
    pub log_options: String,

    /// Deployable bundles, searched by `bundle_id`.
    pub bundle: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            log: "logs".to_string(),
            log_options: "logs_options".to_string(),
            bundle: "bundle".to_string(),
        }
    }
}

/// Logger defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Threshold used when the caller passes none.
    pub level: LevelSetting,

    /// Mirror accepted messages to the console.
    pub background_echo: bool,

    /// Options-record `type` that turns off the id echo.
    pub passthrough_type: i64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelSetting::default(),
            background_echo: false,
            passthrough_type: 1,
        }
    }
}
