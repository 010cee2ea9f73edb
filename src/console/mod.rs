//! Console echo and clock collaborators.
//!
//! # Responsibilities
//! - Line-oriented, fire-and-forget console sinks for echoing log lines
//! - Wall-clock access: epoch millis for records, readable stamps for echoes
//!
//! # Design Decisions
//! - Sinks never fail; a lost echo line is not a logging failure
//! - Clocks are injected so record timestamps are testable

pub mod clock;
pub mod sinks;

pub use clock::{Clock, FixedClock, SystemClock};
pub use sinks::{MemoryConsole, StdoutConsole, TracingConsole};

/// A console that accepts whole lines.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, line: &str);
}
