// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content source: blog and notes posts exported by the site build.
//!
//! A content directory holds a `manifest.json` naming one JSON file per post.
//! Loading happens once, before the index is assembled; nothing here is
//! touched at search time.

pub mod manifest;
pub mod parallel;
pub mod post;

use std::fs;
use std::path::Path;

pub use manifest::*;
pub use parallel::*;
pub use post::*;

use crate::error::{Error, Result};

/// Manifest file name inside a content directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Read and version-check `<dir>/manifest.json`.
pub fn read_manifest(dir: &Path) -> Result<InputManifest> {
    let path = dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let manifest: InputManifest = serde_json::from_str(&raw).map_err(|e| Error::json(&path, e))?;
    manifest.check_version()?;
    Ok(manifest)
}

/// Load every post in a content directory, newest first.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    let manifest = read_manifest(dir)?;
    let posts = load_documents(dir, &manifest)?;
    tracing::debug!(dir = %dir.display(), posts = posts.len(), "content loaded");
    Ok(posts)
}
