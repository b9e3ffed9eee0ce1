// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trailing-edge debounce for values that change faster than we want to act on.
//!
//! A [`Debouncer`] holds the last settled value plus at most one pending value
//! with a deadline. Every [`push`](Debouncer::push) replaces the pending value
//! and restarts the window, so while changes keep arriving inside the window
//! nothing settles. Once the input has been quiet for the full delay,
//! [`poll`](Debouncer::poll) promotes the newest value. Intermediate values are
//! dropped, never queued.
//!
//! The clock is an argument. The caller decides what "now" is, which keeps the
//! state machine usable from an event loop, a terminal, or a test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    settled: T,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Start settled on `initial`, with nothing pending.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            settled: initial,
            pending: None,
        }
    }

    /// Record a new value. Any value still waiting is discarded and the
    /// window restarts at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Settle the pending value if its window has elapsed at `now`.
    ///
    /// Returns the newly settled value, or `None` when nothing changed.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match self.pending.take() {
            Some(pending) if now >= pending.deadline => {
                self.settled = pending.value;
                Some(&self.settled)
            }
            still_waiting => {
                self.pending = still_waiting;
                None
            }
        }
    }

    /// Last settled value.
    pub fn current(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will settle, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Drop the pending value without settling it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the window. Takes effect on the next push; a value already
    /// waiting keeps its deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }
}

impl<T: Default> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(T::default(), Duration::from_millis(crate::config::DEFAULT_DEBOUNCE_MS))
    }
}
