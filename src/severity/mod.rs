//! Severity ordinals and threshold coercion.
//!
//! # Ordinals
//! ```text
//! ERROR = 1   most critical
//! WARNING = 2
//! INFO = 3    default threshold
//! DEBUG = 4   most verbose
//! ```
//!
//! # Design Decisions
//! - A message passes when `threshold >= severity`
//! - Thresholds are stored raw and coerced only when compared
//! - A threshold that does not coerce to a number behaves as INFO

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message. Lower ordinal = more critical.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
}

impl Severity {
    /// All severities, most critical first.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    /// Numeric ordinal of this severity.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Reverse lookup from an ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ordinal() == ordinal)
    }

    /// Uppercase name, as written in console echo lines.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.ordinal()
    }
}

/// Error for an unknown severity name or ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl TryFrom<u8> for Severity {
    type Error = UnknownSeverity;

    fn try_from(value: u8) -> Result<Self, UnknownSeverity> {
        Severity::from_ordinal(value).ok_or_else(|| UnknownSeverity(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    /// Accepts names case-insensitively (`warn` is an alias) or ordinals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<u8>() {
            return Severity::try_from(ordinal);
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// A threshold as handed to the logger, before coercion.
///
/// Numbers and numeric strings are both accepted; nothing is validated at
/// assignment time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSetting {
    Number(f64),
    Text(String),
}

impl LevelSetting {
    /// Numeric value of the threshold, or `None` when it does not coerce.
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            LevelSetting::Number(n) => *n,
            LevelSetting::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Effective threshold used for filtering. Falls back to INFO.
    pub fn threshold(&self) -> f64 {
        self.coerce()
            .unwrap_or_else(|| f64::from(Severity::Info.ordinal()))
    }

    /// True when a message of `severity` should be written.
    pub fn allows(&self, severity: Severity) -> bool {
        self.threshold() >= f64::from(severity.ordinal())
    }
}

impl Default for LevelSetting {
    fn default() -> Self {
        LevelSetting::from(Severity::Info)
    }
}

impl From<Severity> for LevelSetting {
    fn from(severity: Severity) -> Self {
        LevelSetting::Number(f64::from(severity.ordinal()))
    }
}

impl From<u8> for LevelSetting {
    fn from(value: u8) -> Self {
        LevelSetting::Number(f64::from(value))
    }
}

impl From<i32> for LevelSetting {
    fn from(value: i32) -> Self {
        LevelSetting::Number(f64::from(value))
    }
}

impl From<i64> for LevelSetting {
    fn from(value: i64) -> Self {
        LevelSetting::Number(value as f64)
    }
}

impl From<&str> for LevelSetting {
    fn from(value: &str) -> Self {
        LevelSetting::Text(value.to_string())
    }
}

impl From<String> for LevelSetting {
    fn from(value: String) -> Self {
        LevelSetting::Text(value)
    }
}

impl fmt::Display for LevelSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelSetting::Number(n) => write!(f, "{}", n),
            LevelSetting::Text(s) => write!(f, "{:?}", s),
        }
    }
}
