//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::EventLog;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service resolving a short code back to its original URL.
///
/// Shares the same repository instance as [`super::LinkService`], so both
/// always observe the same persisted collection. Every resolution loads the
/// collection fresh from the store rather than consulting any cached copy.
pub struct RedirectService<R: LinkRepository> {
    repository: Arc<R>,
    event_log: Arc<EventLog>,
}

impl<R: LinkRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>, event_log: Arc<EventLog>) -> Self {
        Self {
            repository,
            event_log,
        }
    }

    /// Resolves `code` to its stored link.
    ///
    /// Lookup is an exact, case-sensitive match against a freshly loaded
    /// collection. A hit logs an info event; a miss logs an error event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link matches `code`.
    /// Propagates repository failures.
    pub fn resolve(&self, code: &str) -> Result<Link, AppError> {
        match self.repository.find_by_code(code) {
            Ok(Some(link)) => {
                self.event_log.info(
                    format!("Redirecting to {}", link.original),
                    json!({ "code": link.code }),
                );
                Ok(link)
            }
            Ok(None) => {
                let err = AppError::not_found(
                    format!("No link found for code: {code}"),
                    json!({ "code": code }),
                );
                self.event_log
                    .error(err.to_string(), json!({ "kind": err.kind() }));
                Err(err)
            }
            Err(err) => {
                self.event_log
                    .error(err.to_string(), json!({ "kind": err.kind() }));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LogLevel;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    #[test]
    fn test_resolve_hit_logs_info_and_returns_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc12")
            .times(1)
            .returning(|code| {
                Ok(Some(Link::new(
                    code.to_string(),
                    "https://example.com".to_string(),
                    Utc::now(),
                )))
            });

        let event_log = Arc::new(EventLog::new());
        let service = RedirectService::new(Arc::new(repo), event_log.clone());

        let link = service.resolve("abc12").unwrap();
        assert_eq!(link.original, "https://example.com");

        let entries = event_log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[0].message, "Redirecting to https://example.com");
    }

    #[test]
    fn test_resolve_miss_logs_error() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let event_log = Arc::new(EventLog::new());
        let service = RedirectService::new(Arc::new(repo), event_log.clone());

        let err = service.resolve("zzzzz").unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let entries = event_log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(entries[0].message, "No link found for code: zzzzz");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let mut repo = MockLinkRepository::new();
        // The repository contract is an exact match; the service passes the
        // code through untouched.
        repo.expect_find_by_code()
            .withf(|code| code == "ABC12")
            .times(1)
            .returning(|_| Ok(None));

        let event_log = Arc::new(EventLog::new());
        let service = RedirectService::new(Arc::new(repo), event_log);

        assert!(service.resolve("ABC12").is_err());
    }

    #[test]
    fn test_resolve_propagates_storage_parse_failure() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| {
            Err(AppError::storage_parse(
                "Stored link collection is not valid JSON",
                serde_json::json!({}),
            ))
        });

        let event_log = Arc::new(EventLog::new());
        let service = RedirectService::new(Arc::new(repo), event_log.clone());

        let err = service.resolve("abc12").unwrap_err();
        assert!(matches!(err, AppError::StorageParse { .. }));
        assert_eq!(event_log.len(), 1);
    }
}
