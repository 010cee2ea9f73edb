//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Table names must be non-empty and distinct
//! - The default level must coerce to a known severity
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogConfig → Result<(), Vec<ValidationError>>
//! - Runtime `set_level` stays lenient; only files are checked

use thiserror::Error;

use crate::config::schema::LogConfig;
use crate::severity::Severity;

/// A single semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("table name for `{0}` is empty")]
    EmptyTable(&'static str),

    #[error("tables `{0}` and `{1}` share the name {2:?}")]
    DuplicateTable(&'static str, &'static str, String),

    #[error("logger level {0} is not a severity ordinal (1-4)")]
    InvalidLevel(String),
}

/// Check a config, collecting every problem found.
pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let tables = [
        ("log", &config.tables.log),
        ("log_options", &config.tables.log_options),
        ("bundle", &config.tables.bundle),
    ];

    for (key, name) in tables {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyTable(key));
        }
    }

    for (i, &(a, name_a)) in tables.iter().enumerate() {
        for &(b, name_b) in tables.iter().skip(i + 1) {
            if !name_a.trim().is_empty() && name_a == name_b {
                errors.push(ValidationError::DuplicateTable(a, b, name_a.to_string()));
            }
        }
    }

    let level = &config.logger.level;
    let known = level
        .coerce()
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u8::MAX))
        .and_then(|n| Severity::from_ordinal(n as u8))
        .is_some();
    if !known {
        errors.push(ValidationError::InvalidLevel(level.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
