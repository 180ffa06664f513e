//! Core domain entities.

pub mod link;
pub mod log_entry;

pub use link::{Link, NewLink};
pub use log_entry::{LogEntry, LogLevel};
