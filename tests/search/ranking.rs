//! Ranking: match tiers, priority weighting and ordering.

use super::common::{ids, make_item, make_item_unweighted, sample_index, sample_items, site_index};
use folio::scoring::{field_score, CONTAINS_SCORE, EXACT_SCORE, PREFIX_SCORE};
use folio::{search_items, ItemKind, SearchItem};

#[test]
fn test_exact_title_ranks_first_any_case() {
    let items = sample_items();
    assert_eq!(search_items("blog", &items)[0].id, "blog");
    assert_eq!(search_items("BLOG", &items)[0].id, "blog");
    assert_eq!(search_items("Blog", &items)[0].id, "blog");
}

#[test]
fn test_exact_title_match_score_is_100() {
    let index = sample_index();
    let top = &index.rank("about")[0];
    assert_eq!(top.item.id, "about");
    assert_eq!(top.match_score, EXACT_SCORE);
    assert_eq!(top.score, 700);
}

#[test]
fn test_tiers_order_single_field() {
    assert_eq!(field_score("TypeScript", "typescript"), EXACT_SCORE);
    assert_eq!(field_score("TypeScript Handbook", "typescript"), PREFIX_SCORE);
    assert_eq!(field_score("Understanding TypeScript", "typescript"), CONTAINS_SCORE);
    assert_eq!(field_score("Understanding TypeScript", "typscrpt"), 80);
    assert_eq!(field_score("Understanding TypeScript", "xyz"), 0);
}

#[test]
fn test_fuzzy_finds_misspelled_title() {
    let items = sample_items();
    let results = search_items("typscrpt", &items);
    assert_eq!(results[0].title, "Understanding TypeScript");
}

#[test]
fn test_tag_match_counts() {
    let items = sample_items();
    let index = sample_index();
    let top = &index.rank("javascript")[0];
    assert_eq!(top.item.id, "post-2");
    assert_eq!(top.match_score, EXACT_SCORE);
    assert_eq!(ids(&search_items("javascript", &items))[0], "post-2");
}

#[test]
fn test_description_match_counts() {
    let items = sample_items();
    let results = search_items("fundamentals", &items);
    assert_eq!(results[0].id, "post-1");
}

#[test]
fn test_priority_multiplies_match() {
    // Same title, different weights: the heavier one wins.
    let items = vec![
        make_item("light", "Photos", 2),
        make_item("heavy", "Photos", 9),
    ];
    assert_eq!(ids(&search_items("photos", &items)), ["heavy", "light"]);
}

#[test]
fn test_priority_can_outweigh_better_match() {
    // contains (60) × 10 beats exact (100) × 1
    let items = vec![
        make_item_unweighted("exact", "Rust"),
        make_item("weighted", "Why Rust", 10),
    ];
    assert_eq!(ids(&search_items("rust", &items)), ["weighted", "exact"]);
}

#[test]
fn test_zero_priority_is_excluded() {
    let items = vec![make_item("hidden", "Hidden", 0), make_item_unweighted("shown", "Hidden")];
    assert_eq!(ids(&search_items("hidden", &items)), ["shown"]);
}

#[test]
fn test_best_field_wins() {
    let item = SearchItem::new("p", "Unrelated", "/p", ItemKind::Post)
        .with_description("something about rust")
        .with_tags(["rust"]);
    let index = folio::SearchIndex::builder().item(item).build().unwrap();
    assert_eq!(index.rank("rust")[0].match_score, EXACT_SCORE);
}

#[test]
fn test_results_sorted_descending() {
    let index = site_index();
    for query in ["a", "o", "rust", "blog", "swift", "git"] {
        let results = index.rank(query);
        assert!(
            results.windows(2).all(|pair| pair[0].score >= pair[1].score),
            "unsorted results for '{}'",
            query
        );
    }
}

#[test]
fn test_external_links_are_searchable() {
    let index = site_index();
    let results = index.search("github");
    assert_eq!(results[0].id, "orbit-github");
    assert!(results[0].target().is_external());
}

#[test]
fn test_posts_are_searchable_by_slug_tag() {
    let index = site_index();
    let results = index.search("swift");
    assert_eq!(results[0].id, "post-swift-concurrency");
    assert_eq!(results[0].href, "/blog/swift-concurrency");
}
