// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::error::{Error, Result};

/// Manifest format this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a content directory: which post files to load.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
}

impl InputManifest {
    pub fn check_version(&self) -> Result<()> {
        if self.version == MANIFEST_VERSION {
            Ok(())
        } else {
            Err(Error::UnsupportedVersion {
                what: "manifest",
                found: self.version,
                expected: MANIFEST_VERSION,
            })
        }
    }
}
