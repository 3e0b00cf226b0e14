// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe drag helper: turn pointer positions into offset deltas and a
//! release velocity.
//!
//! ## Usage
//!
//! 1) Start tracking with [`SwipeDrag::start`] at the pointer-down position.
//! 2) On each move, call [`SwipeDrag::update`]; it returns the change in swipe
//!    offset once the gesture has locked horizontally.
//! 3) On release, [`SwipeDrag::end`] returns the offset velocity in units per
//!    millisecond, or `None` if no horizontal swipe took place.
//!
//! Swipe offsets grow as the content moves left, so a pointer moving left by
//! `n` pixels yields an offset delta of `+n`.
//!
//! The first non-zero movement locks the gesture to one axis. A
//! vertically-locked gesture never yields deltas, which leaves it to the
//! hosting list to scroll.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::SwipeDrag;
//!
//! let mut drag = SwipeDrag::default();
//! drag.start(Point::new(200.0, 20.0), 0);
//!
//! // Pointer moves 30px to the left: the offset grows by 30.
//! assert_eq!(drag.update(Point::new(170.0, 22.0), 10), Some(30.0));
//! assert_eq!(drag.total_offset(Point::new(170.0, 22.0)), Some(30.0));
//!
//! // Released while moving 3 px/ms.
//! assert_eq!(drag.end(20), Some(3.0));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Point;

/// Axis a drag gesture has committed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// A swipe: deltas are forwarded to the row.
    Horizontal,
    /// A list scroll: the row ignores the gesture.
    Vertical,
}

/// Tracks a pointer drag for swipe processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct SwipeDrag {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    last_time_ms: u64,
    axis: Option<DragAxis>,
    velocity: f64,
}

impl SwipeDrag {
    /// Start tracking a new drag at `pos`, replacing any previous one.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        *self = Self {
            start_pos: Some(pos),
            last_pos: Some(pos),
            last_time_ms: time_ms,
            axis: None,
            velocity: 0.0,
        };
    }

    /// Record a new pointer position.
    ///
    /// Returns the swipe offset delta since the previous position, or `None`
    /// when not dragging, not yet locked, or locked vertically.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<f64> {
        self.start_pos?;
        let Some(last) = self.last_pos.replace(pos) else {
            self.last_time_ms = time_ms;
            return None;
        };
        let moved = pos - last;
        if self.axis.is_none() && (moved.x != 0.0 || moved.y != 0.0) {
            self.axis = Some(if moved.x.abs() >= moved.y.abs() {
                DragAxis::Horizontal
            } else {
                DragAxis::Vertical
            });
        }
        if self.axis != Some(DragAxis::Horizontal) {
            self.last_time_ms = time_ms;
            return None;
        }
        let delta = -moved.x;
        let elapsed = time_ms.saturating_sub(self.last_time_ms);
        if elapsed > 0 {
            self.velocity = delta / elapsed as f64;
        }
        self.last_time_ms = time_ms;
        Some(delta)
    }

    /// Total swipe offset change from the start position to `current_pos`.
    ///
    /// `None` unless the drag is active and locked horizontally.
    pub fn total_offset(&self, current_pos: Point) -> Option<f64> {
        match (self.start_pos, self.axis) {
            (Some(start), Some(DragAxis::Horizontal)) => Some(start.x - current_pos.x),
            _ => None,
        }
    }

    /// The axis the gesture locked to, if any movement occurred yet.
    pub fn axis(&self) -> Option<DragAxis> {
        self.axis
    }

    /// End the drag and reset state.
    ///
    /// Returns the latest offset velocity for a horizontal swipe. A pause of
    /// more than 100 ms since the last move counts as a release at rest.
    pub fn end(&mut self, time_ms: u64) -> Option<f64> {
        let swiped = self.start_pos.is_some() && self.axis == Some(DragAxis::Horizontal);
        let velocity = if time_ms.saturating_sub(self.last_time_ms) > 100 {
            0.0
        } else {
            self.velocity
        };
        *self = Self::default();
        swiped.then_some(velocity)
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` while a drag is active and locked horizontally.
    pub fn is_swiping(&self) -> bool {
        self.is_dragging() && self.axis == Some(DragAxis::Horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_is_idle() {
        let drag = SwipeDrag::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.axis(), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = SwipeDrag::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0), 1), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn horizontal_moves_yield_negated_deltas() {
        let mut drag = SwipeDrag::default();
        drag.start(Point::new(100.0, 0.0), 0);
        assert_eq!(drag.update(Point::new(90.0, 1.0), 5), Some(10.0));
        assert_eq!(drag.update(Point::new(95.0, 1.0), 10), Some(-5.0));
        assert_eq!(drag.axis(), Some(DragAxis::Horizontal));
        assert_eq!(drag.total_offset(Point::new(95.0, 1.0)), Some(5.0));
    }

    #[test]
    fn vertical_lock_suppresses_deltas() {
        let mut drag = SwipeDrag::default();
        drag.start(Point::new(100.0, 100.0), 0);
        assert_eq!(drag.update(Point::new(98.0, 120.0), 5), None);
        assert_eq!(drag.update(Point::new(50.0, 121.0), 10), None);
        assert_eq!(drag.axis(), Some(DragAxis::Vertical));
        assert!(!drag.is_swiping());
        assert_eq!(drag.end(12), None);
    }

    #[test]
    fn zero_movement_does_not_lock() {
        let mut drag = SwipeDrag::default();
        drag.start(Point::new(10.0, 10.0), 0);
        assert_eq!(drag.update(Point::new(10.0, 10.0), 3), None);
        assert_eq!(drag.axis(), None);
        assert_eq!(drag.update(Point::new(4.0, 10.0), 6), Some(6.0));
    }

    #[test]
    fn velocity_tracks_last_move() {
        let mut drag = SwipeDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(-10.0, 0.0), 10);
        drag.update(Point::new(-30.0, 0.0), 20);
        assert_eq!(drag.end(25), Some(2.0));
    }

    #[test]
    fn pause_before_release_reports_rest() {
        let mut drag = SwipeDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(-50.0, 0.0), 10);
        assert_eq!(drag.end(500), Some(0.0));
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = SwipeDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(0.0, 30.0), 5);

        drag.start(Point::new(50.0, 60.0), 10);
        assert_eq!(drag.axis(), None);
        assert_eq!(drag.update(Point::new(45.0, 60.0), 15), Some(5.0));
    }
}
