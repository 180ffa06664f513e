//! Link creation and listing service.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::EventLog;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating and listing shortened links.
///
/// Owns no state of its own; every call goes through the shared repository,
/// and every outcome (success or failure) is appended to the session event
/// log.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    event_log: Arc<EventLog>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, event_log: Arc<EventLog>) -> Self {
        Self {
            repository,
            event_log,
        }
    }

    /// Creates a short link for `url`.
    ///
    /// # Arguments
    ///
    /// - `url` - The original URL; must start with the literal prefix `http`
    /// - `custom_code` - Optional custom short code; a non-empty value is
    ///   used verbatim, otherwise a random 5-character code is generated
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not start with
    /// `http`, [`AppError::Conflict`] if the effective code is already
    /// taken. Either failure leaves the collection unchanged and appends an
    /// error event to the log.
    pub fn shorten(&self, url: &str, custom_code: Option<&str>) -> Result<Link, AppError> {
        if !url.starts_with("http") {
            let err = AppError::bad_request("Invalid URL", json!({ "url": url }));
            self.event_log
                .error(err.to_string(), json!({ "kind": err.kind(), "url": url }));
            return Err(err);
        }

        let code = match custom_code {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => generate_code(),
        };

        let new_link = NewLink {
            code,
            original: url.to_string(),
        };

        match self.repository.insert_if_absent(new_link) {
            Ok(link) => {
                self.event_log.info(
                    format!("Created short link: {}", link.code),
                    json!({ "original": link.original }),
                );
                Ok(link)
            }
            Err(err) => {
                self.event_log
                    .error(err.to_string(), json!({ "kind": err.kind() }));
                Err(err)
            }
        }
    }

    /// Returns the full collection in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates repository failures, including [`AppError::StorageParse`]
    /// for a corrupt store file.
    pub fn list(&self) -> Result<Vec<Link>, AppError> {
        self.repository.load_all()
    }

    /// Formats the displayed short link `{base}/r/{code}`.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/r/{}", base_url.trim_end_matches('/'), code)
    }
}
