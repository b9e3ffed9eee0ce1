// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while assembling a catalog.
//!
//! Searching never fails. Everything here happens before an index exists:
//! reading config and content files, and validating the items that go into
//! the index.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two items share an id.
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },

    #[error("item '{id}' has an empty href")]
    EmptyHref { id: String },

    #[error("item '{id}' has an empty title")]
    EmptyTitle { id: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config or manifest declares a format version we do not understand.
    #[error("unsupported {what} version {found} (expected {expected})")]
    UnsupportedVersion {
        what: &'static str,
        found: u32,
        expected: u32,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
