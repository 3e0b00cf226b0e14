// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset policy: pure functions from a drag offset to clamped positions,
//! reveal progress, and snap targets.
//!
//! Offsets live on a single axis whose origin is the fully left-revealed
//! position. The closed position sits at `left_width`, and the fully
//! right-revealed position at `left_width + right_width`:
//!
//! ```text
//! 0 ─────────── left_width ─────────── left_width + right_width
//! LeftOpen        Closed                 RightOpen
//! ```
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::{Dock, OffsetPolicy};
//!
//! let policy = OffsetPolicy::new(40.0, 60.0);
//! assert_eq!(policy.clamp(500.0), 100.0);
//! assert_eq!(policy.snap_target(30.0), 0.0);
//! assert_eq!(policy.snap_target(41.0), 40.0);
//! assert_eq!(policy.snap_target(95.0), 100.0);
//!
//! let snap = policy.snap(95.0, 0.5);
//! assert_eq!(snap.dock, Dock::RightOpen);
//! assert!(snap.animate);
//! ```

use crate::config::{DEFAULT_FLING_VELOCITY, DEFAULT_TRIGGER_OFFSET, SwipeConfig};

/// One of the three rest positions of a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dock {
    /// The left group is fully revealed (offset `0`).
    LeftOpen,
    /// Neither group is revealed (offset `left_width`).
    Closed,
    /// The right group is fully revealed (offset `left_width + right_width`).
    RightOpen,
}

/// Reveal progress of both groups, each in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RevealProgress {
    /// How far the left group has slid into view.
    pub left: f64,
    /// How far the right group has slid into view.
    pub right: f64,
}

/// Outcome of releasing a drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snap {
    /// The docked offset to settle at.
    pub target: f64,
    /// The dock that `target` corresponds to.
    pub dock: Dock,
    /// Whether the release was fast enough to animate the settle.
    pub animate: bool,
}

/// Geometry and thresholds that decide where a row settles.
///
/// A policy is a cheap value; build a fresh one from the current group widths
/// whenever they may have changed rather than caching it across a drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetPolicy {
    /// Total width of the left group.
    pub left_width: f64,
    /// Total width of the right group.
    pub right_width: f64,
    /// Reveal distance needed to snap the left group open.
    pub left_trigger: f64,
    /// Distance past closed needed to snap the right group open.
    pub right_trigger: f64,
    /// Release speed above which settles are animated.
    pub fling_velocity: f64,
}

impl OffsetPolicy {
    /// Creates a policy with default triggers and fling threshold.
    #[must_use]
    pub fn new(left_width: f64, right_width: f64) -> Self {
        Self {
            left_width,
            right_width,
            left_trigger: DEFAULT_TRIGGER_OFFSET,
            right_trigger: DEFAULT_TRIGGER_OFFSET,
            fling_velocity: DEFAULT_FLING_VELOCITY,
        }
    }

    /// Creates a policy using the thresholds from `config`.
    #[must_use]
    pub fn from_config(config: &SwipeConfig, left_width: f64, right_width: f64) -> Self {
        Self {
            left_width,
            right_width,
            left_trigger: config.left_trigger_offset,
            right_trigger: config.right_trigger_offset,
            fling_velocity: config.fling_velocity,
        }
    }

    /// Returns a copy with the given trigger offsets.
    #[must_use]
    pub fn with_triggers(mut self, left: f64, right: f64) -> Self {
        self.left_trigger = left;
        self.right_trigger = right;
        self
    }

    /// The closed offset.
    #[must_use]
    pub fn closed_offset(&self) -> f64 {
        self.left_width
    }

    /// The largest valid offset (right group fully revealed).
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.left_width + self.right_width
    }

    /// The offset of a given dock.
    #[must_use]
    pub fn offset_for(&self, dock: Dock) -> f64 {
        match dock {
            Dock::LeftOpen => 0.0,
            Dock::Closed => self.closed_offset(),
            Dock::RightOpen => self.max_offset(),
        }
    }

    /// Constrains `raw` to `[0, left_width + right_width]`.
    ///
    /// `NaN` maps to the closed offset. Idempotent.
    #[must_use]
    pub fn clamp(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return self.closed_offset();
        }
        raw.clamp(0.0, self.max_offset())
    }

    /// Reveal progress of both groups at `offset`.
    ///
    /// A group with zero width always reports `0`.
    #[must_use]
    pub fn progress_at(&self, offset: f64) -> RevealProgress {
        let right = if self.right_width > 0.0 {
            clamp01((offset - self.left_width) / self.right_width)
        } else {
            0.0
        };
        let left = if self.left_width > 0.0 {
            clamp01(1.0 - offset / self.left_width)
        } else {
            0.0
        };
        RevealProgress { left, right }
    }

    /// The docked offset a drag released at `offset` settles to.
    ///
    /// Only the release position matters; the path the drag took does not.
    /// The left trigger never reaches past the closed position, so a release
    /// on the right of closed cannot snap the left group open.
    #[must_use]
    pub fn snap_target(&self, offset: f64) -> f64 {
        self.offset_for(self.snap_dock(offset))
    }

    /// The dock a drag released at `offset` settles to.
    #[must_use]
    pub fn snap_dock(&self, offset: f64) -> Dock {
        if offset > self.left_width + self.right_trigger {
            Dock::RightOpen
        } else if offset < self.left_trigger.min(self.left_width) {
            Dock::LeftOpen
        } else {
            Dock::Closed
        }
    }

    /// Snap target plus whether the release `velocity` warrants an animation.
    ///
    /// Velocity only decides between animating and placing instantly; it
    /// never changes the target.
    #[must_use]
    pub fn snap(&self, offset: f64, velocity: f64) -> Snap {
        let dock = self.snap_dock(offset);
        Snap {
            target: self.offset_for(dock),
            dock,
            animate: self.is_fling(velocity),
        }
    }

    /// Returns `true` if `velocity` exceeds the fling threshold in magnitude.
    #[must_use]
    pub fn is_fling(&self, velocity: f64) -> bool {
        velocity.abs() > self.fling_velocity
    }

    /// The dock `offset` currently rests at.
    ///
    /// Anything other than an exact open position reports [`Dock::Closed`],
    /// which also covers offsets in transit. A zero-width group never reports
    /// as open.
    #[must_use]
    pub fn dock_at(&self, offset: f64) -> Dock {
        if offset == self.closed_offset() {
            Dock::Closed
        } else if offset <= 0.0 && self.left_width > 0.0 {
            Dock::LeftOpen
        } else if offset >= self.max_offset() && self.right_width > 0.0 {
            Dock::RightOpen
        } else {
            Dock::Closed
        }
    }
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
