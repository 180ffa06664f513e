//! Session-scoped diagnostic event log.

use std::sync::Mutex;

use chrono::Utc;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::entities::{LogEntry, LogLevel};

/// In-memory, append-only event log for one process session.
///
/// Entries are kept in append order (rendered most-recent-last), never
/// capped, never persisted. Every append is mirrored to `tracing` so the
/// events also reach the configured subscriber output.
#[derive(Default)]
pub struct EventLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an info-level entry.
    pub fn info(&self, message: impl Into<String>, metadata: Value) {
        self.append(LogLevel::Info, message.into(), metadata);
    }

    /// Appends an error-level entry.
    pub fn error(&self, message: impl Into<String>, metadata: Value) {
        self.append(LogLevel::Error, message.into(), metadata);
    }

    fn append(&self, level: LogLevel, message: String, metadata: Value) {
        match level {
            LogLevel::Info => info!(%metadata, "{message}"),
            LogLevel::Error => error!(%metadata, "{message}"),
        }

        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message,
            metadata,
        };
        self.entries.lock().expect("event log lock poisoned").push(entry);
    }

    /// Snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("event log lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("event log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
