//! Edge cases: odd queries, odd catalogs.

use super::common::{make_item, many_posts, sample_items, site_index};
use folio::{search_items, ItemKind, SearchItem};

#[test]
fn test_special_characters_match_nothing() {
    let items = sample_items();
    assert!(search_items("!@#$", &items).is_empty());
    assert!(search_items("zzzzzz", &items).is_empty());
}

#[test]
fn test_empty_catalog() {
    assert!(search_items("", &[]).is_empty());
    assert!(search_items("anything", &[]).is_empty());
}

#[test]
fn test_ranked_results_capped_at_ten() {
    let items = many_posts(25);
    let results = search_items("notes", &items);
    assert_eq!(results.len(), 10);
    // All tie on score, so the first ten in catalog order survive.
    assert_eq!(results[0].id, "post-0");
    assert_eq!(results[9].id, "post-9");
}

#[test]
fn test_query_whitespace_is_significant() {
    // Only an all-whitespace query browses; inner and outer spaces are matched.
    let items = vec![make_item("pair", "Rust Search", 5)];
    assert_eq!(search_items("rust search", &items).len(), 1);
    assert_eq!(search_items("rust ", &items).len(), 1);
    assert!(search_items("rust  search", &items).is_empty());
}

#[test]
fn test_unicode_titles() {
    let items = vec![
        make_item("cafe", "Café Notes", 5),
        make_item("tokyo", "東京 Photos", 5),
    ];
    assert_eq!(search_items("CAFÉ", &items)[0].id, "cafe");
    assert_eq!(search_items("東京", &items)[0].id, "tokyo");
}

#[test]
fn test_minimal_item_matches_by_title() {
    let items = vec![SearchItem::new("bare", "Bare", "/bare", ItemKind::Page)];
    let results = search_items("bare", &items);
    assert_eq!(results.len(), 1);
    assert!(results[0].description.is_none());
    assert!(results[0].tags.is_empty());
}

#[test]
fn test_single_character_query() {
    let index = site_index();
    let results = index.rank("x");
    assert!(results.len() <= 10);
    assert!(results.iter().any(|scored| scored.item.id == "orbit-twitter"));
}

#[test]
fn test_long_query_still_total() {
    let index = site_index();
    let query = "a".repeat(10_000);
    assert!(index.search(&query).is_empty());
}
