//! Shared application state wiring the store into both services.

use std::sync::Arc;

use crate::application::services::{EventLog, LinkService, RedirectService};
use crate::config::Config;
use crate::infrastructure::persistence::JsonLinkRepository;

/// Bundles the services and the session event log for the CLI.
///
/// A single [`JsonLinkRepository`] instance is shared by the shortening and
/// resolving services, so both always read and write the same collection.
pub struct AppState {
    pub link_service: Arc<LinkService<JsonLinkRepository>>,
    pub redirect_service: Arc<RedirectService<JsonLinkRepository>>,
    pub event_log: Arc<EventLog>,
    pub base_url: String,
}

impl AppState {
    /// Builds the state from configuration.
    pub fn new(config: &Config) -> Self {
        let repository = Arc::new(JsonLinkRepository::new(config.store_path.clone()));
        let event_log = Arc::new(EventLog::new());

        let link_service = Arc::new(LinkService::new(repository.clone(), event_log.clone()));
        let redirect_service =
            Arc::new(RedirectService::new(repository, event_log.clone()));

        Self {
            link_service,
            redirect_service,
            event_log,
            base_url: config.base_url.clone(),
        }
    }
}
