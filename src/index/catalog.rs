// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The site's own catalog: top-level pages, contact and social links, and
//! the conversion from loaded posts into searchable items.

use crate::content::Post;
use crate::types::{ItemKind, SearchItem};

/// Priority every blog post is indexed with. Below the browse threshold, so
/// posts only show up once the user types.
pub const POST_PRIORITY: u32 = 4;

pub const POST_ICON: &str = "📰";

/// Built-in pages and links, in the order the site lists them.
pub fn site_pages() -> Vec<SearchItem> {
    vec![
        SearchItem::new("home", "Home", "/", ItemKind::Page)
            .with_description("Allen Lee")
            .with_priority(10)
            .with_icon("🏠"),
        SearchItem::new("blog", "Blog", "/blog", ItemKind::Page)
            .with_description("Blog posts and writings")
            .with_priority(8)
            .with_icon("📝"),
        SearchItem::new("books", "Books", "/books", ItemKind::Page)
            .with_description("Reading list and recommendations")
            .with_priority(6)
            .with_icon("📚"),
        SearchItem::new("movies", "Movies", "/movies", ItemKind::Page)
            .with_description("Movie collection and ratings")
            .with_priority(5)
            .with_icon("🎬"),
    ]
}

/// Contact and social links. Listed after posts in the assembled catalog.
pub fn external_links() -> Vec<SearchItem> {
    vec![
        SearchItem::new("email", "Email", "mailto:allenleexyz@gmail.com", ItemKind::External)
            .with_description("allenleexyz@gmail.com")
            .with_priority(8)
            .with_icon("📧"),
        SearchItem::new(
            "orbit-instagram",
            "Instagram",
            "https://www.instagram.com/allen.35mm/",
            ItemKind::External,
        )
        .with_description("allen.35mm on Instagram")
        .with_priority(6)
        .with_icon("📸")
        .with_tags(["instagram", "social", "photo"]),
        SearchItem::new(
            "orbit-github",
            "GitHub",
            "https://github.com/allenv0",
            ItemKind::External,
        )
        .with_description("allenv0 on GitHub")
        .with_priority(7)
        .with_icon("💻")
        .with_tags(["github", "code", "repo"]),
        SearchItem::new(
            "orbit-airposture",
            "AirPosture",
            "https://www.airposture.pro/",
            ItemKind::External,
        )
        .with_description("AirPods as an AI Posture Coach")
        .with_priority(7)
        .with_icon("🧘")
        .with_tags(["airposture", "air8", "ios", "app"]),
        SearchItem::new(
            "orbit-twitter",
            "X/Twitter",
            "https://x.com/allenleexyz",
            ItemKind::External,
        )
        .with_description("allenleexyz on X")
        .with_priority(7)
        .with_icon("𝕏")
        .with_tags(["twitter", "x", "social"]),
    ]
}

/// One searchable item per post.
pub fn post_items(posts: &[Post]) -> Vec<SearchItem> {
    posts.iter().map(post_item).collect()
}

/// `post-<slug>` at `/blog/<slug>`, tagged with the slug's first dash segment.
pub fn post_item(post: &Post) -> SearchItem {
    let tag = post.slug.split('-').next().unwrap_or_default();

    SearchItem::new(
        format!("post-{}", post.slug),
        post.title.clone(),
        format!("/blog/{}", post.slug),
        ItemKind::Post,
    )
    .with_description(post.summary.clone())
    .with_priority(POST_PRIORITY)
    .with_icon(POST_ICON)
    .with_tags([tag])
}

/// Full default catalog: pages, then posts, then external links.
pub fn default_catalog(posts: &[Post]) -> Vec<SearchItem> {
    let mut items = site_pages();
    items.extend(post_items(posts));
    items.extend(external_links());
    items
}
