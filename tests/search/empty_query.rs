//! Browse view: what the palette lists before anything is typed.

use super::common::{ids, make_item, make_item_unweighted, sample_items, site_index};
use folio::{rank, search_items, SearchLimits};

#[test]
fn test_browse_filters_and_orders_by_priority() {
    let items = vec![
        make_item("home", "Home", 10),
        make_item("blog", "Blog", 8),
        make_item("about", "About", 7),
        make_item("contact", "Contact", 6),
    ];
    assert_eq!(ids(&search_items("", &items)), ["home", "blog", "about"]);
}

#[test]
fn test_whitespace_query_is_browse() {
    let items = sample_items();
    assert_eq!(search_items("   ", &items), search_items("", &items));
    assert_eq!(search_items("\t\n", &items), search_items("", &items));
}

#[test]
fn test_browse_capped_at_eight() {
    let items: Vec<_> = (0..12)
        .map(|i| make_item(&format!("page-{}", i), &format!("Page {}", i), 7 + i % 3))
        .collect();
    let results = search_items("", &items);
    assert_eq!(results.len(), 8);
    assert!(results
        .windows(2)
        .all(|pair| pair[0].priority >= pair[1].priority));
}

#[test]
fn test_browse_ties_keep_input_order() {
    let items = vec![
        make_item("first", "First", 7),
        make_item("second", "Second", 9),
        make_item("third", "Third", 7),
    ];
    assert_eq!(ids(&search_items("", &items)), ["second", "first", "third"]);
}

#[test]
fn test_unprioritized_items_never_browse() {
    let items = vec![make_item_unweighted("plain", "Plain"), make_item("low", "Low", 6)];
    assert!(search_items("", &items).is_empty());
}

#[test]
fn test_browse_scores_carry_priority() {
    let index = site_index();
    let results = index.rank("");
    assert!(!results.is_empty());
    for scored in &results {
        assert_eq!(scored.match_score, 0);
        assert_eq!(Some(scored.score as u32), scored.item.priority);
    }
}

#[test]
fn test_custom_browse_limits() {
    let items = sample_items();
    let limits = SearchLimits {
        browse_limit: 1,
        browse_min_priority: 5,
        ..SearchLimits::default()
    };
    let results = rank("", &items, &limits);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "home");
}

#[test]
fn test_builtin_site_browse() {
    let index = site_index();
    let results: Vec<_> = index.search("").into_iter().map(|item| item.id.as_str()).collect();
    // Posts (priority 4) never browse; links at 7+ do.
    assert_eq!(
        results,
        ["home", "blog", "email", "orbit-github", "orbit-airposture", "orbit-twitter"]
    );
}
