//! Determinism: same query, same catalog, same answer.

use super::common::{site_index, site_items};
use folio::search_items;
use std::thread;

const QUERIES: [&str; 8] = ["", "blog", "rust", "a", "typscrpt", "social", "x", "35mm"];

#[test]
fn test_repeated_searches_identical() {
    let items = site_items();
    for query in QUERIES {
        let first = search_items(query, &items);
        for _ in 0..5 {
            assert_eq!(search_items(query, &items), first, "query '{}'", query);
        }
    }
}

#[test]
fn test_shared_index_across_threads() {
    let index = site_index();
    let expected: Vec<Vec<String>> = QUERIES
        .iter()
        .map(|query| index.search(query).iter().map(|item| item.id.clone()).collect())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = index.clone();
            thread::spawn(move || {
                QUERIES
                    .iter()
                    .map(|query| index.search(query).iter().map(|item| item.id.clone()).collect())
                    .collect::<Vec<Vec<String>>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_catalog_untouched_by_search() {
    let items = site_items();
    let before = items.clone();
    for query in QUERIES {
        search_items(query, &items);
    }
    assert_eq!(items, before);
}
