#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use linkstash::prelude::*;

/// A repository backed by a fresh store file in a temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_repository() -> (Arc<JsonLinkRepository>, TempDir) {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(JsonLinkRepository::new(dir.path().join("links.json")));
    (repo, dir)
}

/// Both services wired to one shared repository, plus the session event log.
pub fn create_test_services() -> (
    LinkService<JsonLinkRepository>,
    RedirectService<JsonLinkRepository>,
    Arc<EventLog>,
    TempDir,
) {
    let (repo, dir) = temp_repository();
    let event_log = Arc::new(EventLog::new());

    let link_service = LinkService::new(repo.clone(), event_log.clone());
    let redirect_service = RedirectService::new(repo, event_log.clone());

    (link_service, redirect_service, event_log, dir)
}

pub fn seed_link(repo: &JsonLinkRepository, code: &str, url: &str) -> Link {
    repo.insert_if_absent(NewLink {
        code: code.to_string(),
        original: url.to_string(),
    })
    .unwrap()
}
