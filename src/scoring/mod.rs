// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` scores single fields and whole items; `ranking` orders the survivors.

mod core;
pub mod ranking;

pub use core::*;
