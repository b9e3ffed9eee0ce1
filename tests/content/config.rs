//! Site config files resolving to an index.

use super::common::{make_post, write_content_dir};
use folio::{Error, SiteConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_relative_posts_dir_resolves_against_config() {
    let root = TempDir::new().unwrap();
    let posts_dir = root.path().join("content");
    fs::create_dir(&posts_dir).unwrap();
    write_content_dir(
        &posts_dir,
        &[make_post("rust-ranking", "Ranking in Rust", "Small fuzzy search")],
    );

    let config_path = root.path().join("site.json");
    fs::write(&config_path, r#"{"version": 1, "posts": "content"}"#).unwrap();

    let config = SiteConfig::load(&config_path).unwrap();
    assert_eq!(config.posts.as_deref(), Some(posts_dir.as_path()));

    let index = config.build_index().unwrap();
    assert!(index.find("post-rust-ranking").is_some());
    assert!(index.find("home").is_some());
    assert_eq!(index.search("ranking")[0].id, "post-rust-ranking");
}

#[test]
fn test_configured_items_plus_posts() {
    let root = TempDir::new().unwrap();
    write_content_dir(root.path(), &[make_post("hello", "Hello", "Hi")]);

    let config_path = root.path().join("site.json");
    fs::write(
        &config_path,
        r#"{
            "posts": ".",
            "items": [
                {"id": "docs", "title": "Docs", "href": "/docs", "type": "page", "priority": 9}
            ],
            "search": {"maxResults": 1}
        }"#,
    )
    .unwrap();

    let index = SiteConfig::load(&config_path).unwrap().build_index().unwrap();
    let ids: Vec<_> = index.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["docs", "post-hello"]);
    assert_eq!(index.limits().max_results, 1);
    assert_eq!(index.search("o").len(), 1);
}

#[test]
fn test_duplicate_configured_ids_rejected() {
    let config = SiteConfig::from_json(
        r#"{"items": [
            {"id": "a", "title": "A", "href": "/a", "type": "page"},
            {"id": "a", "title": "B", "href": "/b", "type": "page"}
        ]}"#,
    )
    .unwrap();
    assert!(matches!(
        config.build_index(),
        Err(Error::DuplicateId { ref id }) if id == "a"
    ));
}

#[test]
fn test_malformed_config_names_file() {
    let root = TempDir::new().unwrap();
    let config_path = root.path().join("broken.json");
    fs::write(&config_path, "{ not json").unwrap();

    let err = SiteConfig::load(&config_path).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_missing_posts_dir_fails_build() {
    let config = SiteConfig::from_json(r#"{"posts": "/definitely/not/here"}"#).unwrap();
    assert!(matches!(config.build_index(), Err(Error::Io { .. })));
}
