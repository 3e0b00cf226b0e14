// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default distance, in logical pixels, a row must be dragged to snap open.
pub const DEFAULT_TRIGGER_OFFSET: f64 = 50.0;

/// Default release speed, in offset units per millisecond, above which a
/// settle is animated instead of applied instantly.
pub const DEFAULT_FLING_VELOCITY: f64 = 0.1;

/// Default duration of animated transitions, in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Tunables shared by a row's state machine and coordinator.
///
/// All distances use the same unit as drag offsets (typically logical pixels).
///
/// ```
/// use understory_swipe::SwipeConfig;
///
/// let config = SwipeConfig::default()
///     .with_left_trigger_offset(30.0)
///     .with_animation_duration_ms(150);
/// assert_eq!(config.left_trigger_offset, 30.0);
/// assert_eq!(config.right_trigger_offset, 50.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Reveal distance required to snap the left group open.
    pub left_trigger_offset: f64,
    /// Drag distance past the closed position required to snap the right group open.
    pub right_trigger_offset: f64,
    /// Release speed magnitude above which the settle animates.
    pub fling_velocity: f64,
    /// Duration of animated transitions, in milliseconds.
    pub animation_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            left_trigger_offset: DEFAULT_TRIGGER_OFFSET,
            right_trigger_offset: DEFAULT_TRIGGER_OFFSET,
            fling_velocity: DEFAULT_FLING_VELOCITY,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl SwipeConfig {
    /// Returns a copy with the given left trigger offset.
    #[must_use]
    pub fn with_left_trigger_offset(mut self, offset: f64) -> Self {
        self.left_trigger_offset = offset;
        self
    }

    /// Returns a copy with the given right trigger offset.
    #[must_use]
    pub fn with_right_trigger_offset(mut self, offset: f64) -> Self {
        self.right_trigger_offset = offset;
        self
    }

    /// Returns a copy with the given fling velocity threshold.
    #[must_use]
    pub fn with_fling_velocity(mut self, velocity: f64) -> Self {
        self.fling_velocity = velocity;
        self
    }

    /// Returns a copy with the given animation duration.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }
}
