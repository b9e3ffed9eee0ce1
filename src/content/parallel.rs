// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel post loading.
//!
//! Every post is its own JSON file, so reading and parsing them is
//! embarrassingly parallel. Rayon does the fan-out; the result is re-sorted
//! afterwards so the catalog never depends on which thread finished first.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use super::{InputManifest, Post};
use crate::error::{Error, Result};

/// Read and parse one post file.
pub fn load_post(path: &Path) -> Result<Post> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let post: Post = serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;

    if post.summary.trim().is_empty() {
        tracing::warn!(slug = %post.slug, "post has an empty summary; it will only match by title");
    }

    Ok(post)
}

/// Load every document listed in the manifest.
///
/// The first read or parse failure aborts the load. Posts come back newest
/// first, ties broken by slug.
pub fn load_documents(input_dir: &Path, manifest: &InputManifest) -> Result<Vec<Post>> {
    #[cfg(feature = "parallel")]
    let documents = manifest.documents.par_iter();
    #[cfg(not(feature = "parallel"))]
    let documents = manifest.documents.iter();

    let mut posts = documents
        .map(|filename| load_post(&input_dir.join(filename)))
        .collect::<Result<Vec<Post>>>()?;

    sort_posts(&mut posts);
    Ok(posts)
}

/// Same as [`load_documents`], ticking `progress` once per file.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<Post>> {
    let mut posts = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let post = load_post(&input_dir.join(filename));
            progress.inc(1);
            post
        })
        .collect::<Result<Vec<Post>>>()?;

    sort_posts(&mut posts);
    Ok(posts)
}

/// Newest first; slug breaks same-day ties.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}
