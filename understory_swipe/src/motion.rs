// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based offset transitions.
//!
//! A [`Motion`] interpolates from one offset to another over a fixed
//! duration with an ease-out curve. Its clock starts on the first sample, so
//! a command can request an animation without knowing the current time.

/// An in-flight animated transition between two offsets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    from: f64,
    to: f64,
    duration_ms: u64,
    start_ms: Option<u64>,
}

impl Motion {
    /// Creates a transition that starts on its first [`sample`](Self::sample).
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_ms: None,
        }
    }

    /// The offset this transition ends at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// The offset this transition started from.
    #[must_use]
    pub fn origin(&self) -> f64 {
        self.from
    }

    /// Returns the offset at `now_ms` and whether the transition has finished.
    ///
    /// A finished transition always lands exactly on its target. Timestamps
    /// earlier than the start are treated as the start.
    pub fn sample(&mut self, now_ms: u64) -> (f64, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        if self.duration_ms == 0 || elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        let inv = 1.0 - t;
        let eased = 1.0 - inv * inv * inv;
        (self.from + (self.to - self.from) * eased, false)
    }
}
