//! Session-scoped diagnostic event entry.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Severity of an event log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    /// Uppercase label used when rendering the log panel.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

/// One entry in the session event log.
///
/// Entries live only for the lifetime of the process; they are never
/// persisted and never removed.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub metadata: Value,
}
