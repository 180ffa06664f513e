//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL link.
///
/// Maps a short code to the original long URL. The persisted layout is a
/// JSON object of shape `{"code", "original", "createdAt"}`, where
/// `createdAt` is milliseconds since the Unix epoch. There is no schema
/// versioning; the whole collection is serialized as one JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Short identifier, unique within the collection at insertion time.
    pub code: String,
    /// The original long URL. Validated only at creation time.
    pub original: String,
    /// Set once at creation, never mutated.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, original: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc12".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.code, "abc12");
        assert_eq!(link.original, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_persisted_layout_is_camel_case_with_epoch_millis() {
        let created = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let link = Link::new("abc12".to_string(), "https://example.com".to_string(), created);

        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["code"], "abc12");
        assert_eq!(value["original"], "https://example.com");
        assert_eq!(value["createdAt"], 1_700_000_000_123_i64);
    }

    #[test]
    fn test_round_trip_preserves_timestamp() {
        let created = Utc.timestamp_millis_opt(42).unwrap();
        let link = Link::new("zzzzz".to_string(), "http://a.com".to_string(), created);

        let json = serde_json::to_string(&link).unwrap();
        let back: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn test_deserializes_raw_record() {
        let raw = r#"{"code":"abc","original":"https://a.com","createdAt":1000}"#;
        let link: Link = serde_json::from_str(raw).unwrap();
        assert_eq!(link.code, "abc");
        assert_eq!(link.created_at.timestamp_millis(), 1000);
    }
}
