//! # linkstash
//!
//! A local-first URL shortener: short codes mapped to long URLs in a single
//! JSON file, with a CLI front-end.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - Shortening, resolution, and the session event log
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file persistence
//! - **CLI** ([`cli`]) - clap subcommands and terminal rendering
//!
//! ## Behavior
//!
//! - `shorten` accepts a URL (must start with `http`) and an optional custom
//!   code; otherwise a random 5-character base-36 code is generated
//! - `resolve` looks a code up against the store and prints the original URL
//! - Everything is stored locally; links only resolve against the same store
//!   file that created them
//! - Operational events (info/error) accumulate in a session-scoped event
//!   log rendered after each command
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: pick a store location
//! export LINKSTASH_PATH="$HOME/.linkstash/links.json"
//!
//! linkstash shorten https://example.com
//! linkstash shorten https://example.com/docs --code docs1
//! linkstash resolve docs1
//! linkstash list
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EventLog, LinkService, RedirectService};
    pub use crate::domain::entities::{Link, LogEntry, LogLevel, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonLinkRepository;
    pub use crate::state::AppState;
}
