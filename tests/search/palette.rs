//! Command palette driven end to end through key events and a fake clock.

use super::common::site_index;
use folio::palette::Modifiers;
use folio::{CommandPalette, KeyEvent, PaletteConfig, Target};
use std::time::{Duration, Instant};

fn type_query(palette: &mut CommandPalette, text: &str, start: Instant) -> Instant {
    // One keystroke every 40ms, each one extending the debounce window.
    let mut now = start;
    for end in 1..=text.len() {
        now += Duration::from_millis(40);
        palette.set_query(&text[..end], now);
        assert!(!palette.tick(now), "settled mid-typing at '{}'", &text[..end]);
    }
    now
}

#[test]
fn test_typing_searches_once_settled() {
    let t0 = Instant::now();
    let mut palette = CommandPalette::new(site_index(), &PaletteConfig::default());
    palette.handle_key(&KeyEvent::with("k", Modifiers::META), t0);
    assert!(palette.is_open());

    let typed_at = type_query(&mut palette, "github", t0);
    assert_eq!(palette.searched_query(), "");

    assert!(palette.tick(typed_at + Duration::from_millis(150)));
    assert_eq!(palette.selected().map(|item| item.id.as_str()), Some("orbit-github"));
}

#[test]
fn test_enter_opens_external_link() {
    let t0 = Instant::now();
    let mut palette = CommandPalette::new(site_index(), &PaletteConfig::default());
    palette.open();
    let typed_at = type_query(&mut palette, "github", t0);
    palette.tick(typed_at + Duration::from_millis(150));

    let selection = palette
        .handle_key(&KeyEvent::new("Enter"), typed_at + Duration::from_millis(200))
        .expect("a result is highlighted");
    assert_eq!(
        selection.target,
        Target::External("https://github.com/allenv0".into())
    );
    assert!(!palette.is_open());
}

#[test]
fn test_arrow_keys_walk_results() {
    let now = Instant::now();
    let mut palette = CommandPalette::new(site_index(), &PaletteConfig::default());
    palette.open();

    let browse: Vec<String> = palette.results().map(|item| item.id.clone()).collect();
    palette.handle_key(&KeyEvent::new("ArrowDown"), now);
    palette.handle_key(&KeyEvent::new("ArrowDown"), now);
    assert_eq!(palette.selected().map(|item| &item.id), Some(&browse[2]));

    let selection = palette.handle_key(&KeyEvent::new("Enter"), now).unwrap();
    assert_eq!(selection.item.id, browse[2]);
}

#[test]
fn test_custom_debounce_window() {
    let t0 = Instant::now();
    let config = PaletteConfig { debounce_ms: 400 };
    let mut palette = CommandPalette::new(site_index(), &config);
    palette.set_query("blog", t0);
    assert!(!palette.tick(t0 + Duration::from_millis(150)));
    assert!(palette.tick(t0 + Duration::from_millis(400)));
}

#[test]
fn test_no_results_status() {
    let t0 = Instant::now();
    let mut palette = CommandPalette::new(site_index(), &PaletteConfig::default());
    palette.set_query("qqqq", t0);
    palette.tick(t0 + Duration::from_millis(150));
    assert_eq!(palette.result_count(), 0);
    assert_eq!(palette.selected(), None);
    assert_eq!(
        palette.status().as_deref(),
        Some("No results found for \"qqqq\"")
    );
}
