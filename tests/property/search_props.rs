//! Ranker properties over random catalogs.

use proptest::prelude::*;
use folio::{search_items, ItemKind, SearchItem};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{1,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

fn item_strategy() -> impl Strategy<Value = (String, Option<String>, Vec<String>, Option<u32>)> {
    (
        text_strategy(),
        prop::option::of(text_strategy()),
        prop::collection::vec(word_strategy(), 0..3),
        prop::option::of(0u32..12),
    )
}

/// A catalog with unique ids, in generation order.
fn catalog_strategy() -> impl Strategy<Value = Vec<SearchItem>> {
    prop::collection::vec(item_strategy(), 0..30).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (title, description, tags, priority))| SearchItem {
                id: format!("item-{}", i),
                title,
                description,
                href: format!("/item/{}", i),
                kind: ItemKind::Page,
                tags,
                priority,
                icon: None,
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Result lists never exceed their caps.
    #[test]
    fn prop_result_bounds(items in catalog_strategy(), query in query_strategy()) {
        let results = search_items(&query, &items);
        let cap = if query.trim().is_empty() { 8 } else { 10 };
        prop_assert!(results.len() <= cap, "{} results for '{}'", results.len(), query);
    }

    /// Same input, same output.
    #[test]
    fn prop_deterministic(items in catalog_strategy(), query in query_strategy()) {
        prop_assert_eq!(search_items(&query, &items), search_items(&query, &items));
    }

    /// Browse only lists priority ≥ 7, highest first.
    #[test]
    fn prop_browse_filter(items in catalog_strategy()) {
        let results = search_items("", &items);
        for item in &results {
            prop_assert!(item.priority.unwrap_or(0) >= 7);
        }
        prop_assert!(results.windows(2).all(|pair| pair[0].priority >= pair[1].priority));

        let eligible = items.iter().filter(|item| item.priority.unwrap_or(0) >= 7).count();
        prop_assert_eq!(results.len(), eligible.min(8));
    }

    /// Case of the query never matters.
    #[test]
    fn prop_case_insensitive(items in catalog_strategy(), query in query_strategy()) {
        prop_assert_eq!(
            search_items(&query.to_uppercase(), &items),
            search_items(&query.to_lowercase(), &items)
        );
    }

    /// Every result is a catalog member, listed once.
    #[test]
    fn prop_results_are_distinct_members(items in catalog_strategy(), query in query_strategy()) {
        let results = search_items(&query, &items);
        let mut seen = std::collections::HashSet::new();
        for item in results {
            prop_assert!(items.contains(item));
            prop_assert!(seen.insert(item.id.clone()));
        }
    }

    /// An item titled exactly the query (any case) with a positive weight is
    /// found, and nothing outranks it unless it has a higher weight.
    #[test]
    fn prop_exact_title_found(title in word_strategy(), priority in 1u32..12) {
        let items = vec![
            SearchItem::new("noise", "--", "/noise", ItemKind::Page).with_priority(priority),
            SearchItem::new("target", title.clone(), "/target", ItemKind::Page).with_priority(priority),
        ];
        let index = folio::SearchIndex::builder().items(items).build().unwrap();
        let results = index.rank(&title.to_uppercase());
        let hit = results.iter().find(|scored| scored.item.id == "target");
        prop_assert!(hit.is_some());
        prop_assert_eq!(hit.unwrap().match_score, 100);
        prop_assert_eq!(results[0].item.id.as_str(), "target");
    }

    /// Queries sharing no character with the catalog find nothing.
    #[test]
    fn prop_disjoint_query_is_empty(items in catalog_strategy(), query in "[!#%&*]{1,4}") {
        prop_assert!(search_items(&query, &items).is_empty());
    }

    /// A bare item (no description, tags or priority) is still found by title.
    #[test]
    fn prop_minimal_item_matchable(title in word_strategy()) {
        let items = vec![SearchItem::new("bare", title.clone(), "/bare", ItemKind::Page)];
        prop_assert_eq!(search_items(&title, &items).len(), 1);
    }
}
