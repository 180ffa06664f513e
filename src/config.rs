//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs.
//!
//! ## Variables
//!
//! - `LINKSTASH_PATH` - Path of the JSON store file (default: `linkstash.json`)
//! - `BASE_URL` - Origin used when displaying short links (default: `http://localhost`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Variables may also come from a `.env` file; `dotenvy` is invoked in
//! `main` before loading.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the link collection.
    pub store_path: PathBuf,
    /// Origin prepended to displayed short links (`{base_url}/r/{code}`).
    /// Only meaningful where the same local store is reachable; links do not
    /// resolve on other machines.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let store_path = env::var("LINKSTASH_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("linkstash.json"));

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            store_path,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `store_path` is empty
    /// - `base_url` does not start with `http`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            anyhow::bail!("LINKSTASH_PATH must not be empty");
        }

        if !self.base_url.starts_with("http") {
            anyhow::bail!(
                "BASE_URL must start with 'http', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Store file: {}", self.store_path.display());
        tracing::debug!("  Base URL: {}", self.base_url);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
