mod common;

use chrono::{TimeZone, Utc};
use linkstash::prelude::*;

#[test]
fn test_save_load_round_trip_preserves_everything() {
    let (repo, _dir) = common::temp_repository();

    let links = vec![
        Link::new(
            "abc12".to_string(),
            "https://example.com".to_string(),
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        ),
        Link::new(
            "xyz99".to_string(),
            "http://rust-lang.org".to_string(),
            Utc.timestamp_millis_opt(1_700_000_000_500).unwrap(),
        ),
    ];

    repo.save_all(&links).unwrap();
    let loaded = repo.load_all().unwrap();

    // Same codes, originals, timestamps, same order.
    assert_eq!(loaded, links);
}

#[test]
fn test_load_all_is_idempotent() {
    let (repo, _dir) = common::temp_repository();
    common::seed_link(&repo, "abc12", "https://example.com");

    let first = repo.load_all().unwrap();
    let second = repo.load_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_all_without_store_file_is_empty() {
    let (repo, _dir) = common::temp_repository();
    assert!(repo.load_all().unwrap().is_empty());
}

#[test]
fn test_corrupt_store_file_is_a_storage_parse_failure() {
    let (repo, _dir) = common::temp_repository();
    std::fs::write(repo.path(), "not json at all").unwrap();

    let err = repo.load_all().unwrap_err();
    assert!(matches!(err, AppError::StorageParse { .. }));
}

#[test]
fn test_find_by_code_is_exact_and_case_sensitive() {
    let (repo, _dir) = common::temp_repository();
    common::seed_link(&repo, "abc", "https://a.com");

    assert!(repo.find_by_code("abc").unwrap().is_some());
    assert!(repo.find_by_code("ABC").unwrap().is_none());
    assert!(repo.find_by_code("ab").unwrap().is_none());
}

#[test]
fn test_insert_if_absent_appends_and_stamps_creation_time() {
    let (repo, _dir) = common::temp_repository();

    let before = Utc::now();
    let link = common::seed_link(&repo, "abc12", "https://example.com");
    let after = Utc::now();

    assert!(link.created_at >= before && link.created_at <= after);

    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded, vec![link]);
}

#[test]
fn test_insert_if_absent_duplicate_leaves_collection_unchanged() {
    let (repo, _dir) = common::temp_repository();
    common::seed_link(&repo, "abc", "https://a.com");

    let err = repo
        .insert_if_absent(NewLink {
            code: "abc".to_string(),
            original: "https://b.com".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));

    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].original, "https://a.com");
}

#[test]
fn test_two_repositories_observe_the_same_file() {
    let (repo, dir) = common::temp_repository();
    common::seed_link(&repo, "abc", "https://a.com");

    // A second instance over the same path sees the persisted collection.
    let other = JsonLinkRepository::new(dir.path().join("links.json"));
    let loaded = other.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].code, "abc");
}
