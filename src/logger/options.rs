//! Caller options and the per-source options record.

use serde::{Deserialize, Serialize};

use crate::severity::LevelSetting;
use crate::store::Record;

/// Options passed when constructing a logger. Unset fields fall back to the
/// loaded [`crate::config::LoggerConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Threshold; stored as given and coerced when compared.
    pub level: Option<LevelSetting>,

    /// Mirror accepted messages to the console.
    pub background_echo: Option<bool>,
}

impl LoggerOptions {
    pub fn level(mut self, level: impl Into<LevelSetting>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn background_echo(mut self, enabled: bool) -> Self {
        self.background_echo = Some(enabled);
        self
    }
}

/// The first options row stored for a source.
#[derive(Debug, Clone, PartialEq)]
pub struct LogOptions {
    row: Record,
}

impl LogOptions {
    pub const BUNDLE_FIELD: &'static str = "bundle";
    pub const TYPE_FIELD: &'static str = "type";
    pub const BACKGROUND_FIELD: &'static str = "background_log";

    pub fn from_record(row: Record) -> Self {
        Self { row }
    }

    /// Options `type`, only when stored as a number. `1` and `1.0` are
    /// equal; the string `"1"` is not a number.
    pub fn kind(&self) -> Option<f64> {
        self.row.get(Self::TYPE_FIELD)?.as_f64()
    }

    /// Per-source background echo switch, if the row carries one.
    pub fn background_log(&self) -> Option<bool> {
        self.row.get(Self::BACKGROUND_FIELD)?.as_bool()
    }

    pub fn record(&self) -> &Record {
        &self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = LoggerOptions::default().level(4).background_echo(true);
        assert_eq!(options.level, Some(LevelSetting::Number(4.0)));
        assert_eq!(options.background_echo, Some(true));
    }

    #[test]
    fn test_options_fields() {
        let options = LogOptions::from_record(
            Record::new()
                .with("bundle", "Billing")
                .with("type", 1)
                .with("background_log", true),
        );
        assert_eq!(options.kind(), Some(1.0));
        assert_eq!(options.background_log(), Some(true));
    }

    #[test]
    fn test_kind_is_numeric_only() {
        let float = LogOptions::from_record(Record::new().with("type", 1.0));
        assert_eq!(float.kind(), Some(1.0));

        let text = LogOptions::from_record(Record::new().with("type", "1"));
        assert_eq!(text.kind(), None);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let options = LogOptions::from_record(Record::new());
        assert_eq!(options.kind(), None);
        assert_eq!(options.background_log(), None);
    }
}
