// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe state machine.
//!
//! [`SwipeState`] owns a row's two action groups, its offset, and the
//! enable flags, and routes every offset change through [`OffsetPolicy`].
//! It never animates on its own: settles that should animate leave the
//! offset in place and report the target, and the caller (usually a
//! [`RowCoordinator`](crate::RowCoordinator)) drives the offset there with
//! [`SwipeState::set_offset`].
//!
//! ## Transitions
//!
//! - `Closed | LeftOpen | RightOpen` → `Dragging` on [`SwipeState::begin_drag`].
//! - `Dragging` → `Dragging` on every [`SwipeState::drag_by`].
//! - `Dragging` → snap target on [`SwipeState::end_drag`].
//! - any → `Closed` on [`SwipeState::hide`] or [`SwipeState::set_items`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::{ActionItem, Side, SwipePhase, SwipeState};
//!
//! let mut state = SwipeState::default();
//! state.set_items(Side::Left, [ActionItem::new("pin", 50.0)]).unwrap();
//! state.set_items(Side::Right, [ActionItem::new("delete", 100.0)]).unwrap();
//! assert_eq!(state.offset(), 50.0);
//!
//! state.begin_drag();
//! state.drag_by(150.0);
//! assert_eq!(state.offset(), 150.0);
//! assert_eq!(state.progress().right, 1.0);
//!
//! let snap = state.end_drag(0.5);
//! assert!(snap.animate);
//! assert_eq!(snap.target, 150.0);
//! assert_eq!(state.phase(), SwipePhase::RightOpen);
//! ```

use alloc::vec::{Drain, Vec};

use crate::config::SwipeConfig;
use crate::error::SwipeError;
use crate::group::{ActionGroup, ActionItem, Side};
use crate::policy::{Dock, OffsetPolicy, RevealProgress, Snap};

/// Interaction phase of a row.
///
/// Outside of a drag this is the dock the row rests at, or is heading to
/// while an animated settle is in flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipePhase {
    /// Neither group revealed.
    Closed,
    /// Left group fully revealed.
    LeftOpen,
    /// Right group fully revealed.
    RightOpen,
    /// The user is dragging the row.
    Dragging,
}

impl From<Dock> for SwipePhase {
    fn from(dock: Dock) -> Self {
        match dock {
            Dock::LeftOpen => Self::LeftOpen,
            Dock::Closed => Self::Closed,
            Dock::RightOpen => Self::RightOpen,
        }
    }
}

/// Notification emitted by a [`SwipeState`].
///
/// Pending notifications are coalesced until drained: the queue holds at most
/// one entry of each kind, and that entry describes the latest change. A
/// phase change that returns to the phase last drained is dropped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeEvent {
    /// Reveal progress of either group changed.
    Progress(RevealProgress),
    /// The phase changed.
    PhaseChanged {
        /// Phase before the change.
        from: SwipePhase,
        /// Phase after the change.
        to: SwipePhase,
    },
    /// Which groups are visible changed.
    ButtonsShown {
        /// Whether left buttons are now showing.
        left: bool,
        /// Whether right buttons are now showing.
        right: bool,
    },
}

/// State machine for one swipeable row.
#[derive(Clone, Debug)]
pub struct SwipeState<H> {
    config: SwipeConfig,
    left: ActionGroup<H>,
    right: ActionGroup<H>,
    offset: f64,
    phase: SwipePhase,
    can_open_left: bool,
    can_open_right: bool,
    shows_left: bool,
    shows_right: bool,
    events: Vec<SwipeEvent>,
}

impl<H> Default for SwipeState<H> {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl<H> SwipeState<H> {
    /// Creates a closed state with empty groups.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            left: ActionGroup::new(Side::Left),
            right: ActionGroup::new(Side::Right),
            offset: 0.0,
            phase: SwipePhase::Closed,
            can_open_left: true,
            can_open_right: true,
            shows_left: false,
            shows_right: false,
            events: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next offset change.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// The action group on `side`.
    pub fn group(&self, side: Side) -> &ActionGroup<H> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// A policy built from the current group widths and configuration.
    pub fn policy(&self) -> OffsetPolicy {
        OffsetPolicy::from_config(
            &self.config,
            self.left.total_width(),
            self.right.total_width(),
        )
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The closed offset (the left group's total width).
    pub fn closed_offset(&self) -> f64 {
        self.left.total_width()
    }

    /// Current phase.
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.phase == SwipePhase::Dragging
    }

    /// The dock the current offset rests at; in-transit offsets report closed.
    pub fn dock(&self) -> Dock {
        self.policy().dock_at(self.offset)
    }

    /// Current reveal progress of both groups.
    pub fn progress(&self) -> RevealProgress {
        RevealProgress {
            left: self.left.progress(),
            right: self.right.progress(),
        }
    }

    /// Whether user drags may open `side`.
    pub fn can_open(&self, side: Side) -> bool {
        match side {
            Side::Left => self.can_open_left,
            Side::Right => self.can_open_right,
        }
    }

    /// Enables or disables user drags opening `side`.
    ///
    /// Disabling never closes a row that is already open on that side; it
    /// only prevents new openings.
    pub fn set_can_open(&mut self, side: Side, enabled: bool) {
        match side {
            Side::Left => self.can_open_left = enabled,
            Side::Right => self.can_open_right = enabled,
        }
    }

    /// Returns `true` while any part of the left group is visible.
    pub fn shows_left_buttons(&self) -> bool {
        self.shows_left
    }

    /// Returns `true` while any part of the right group is visible.
    pub fn shows_right_buttons(&self) -> bool {
        self.shows_right
    }

    /// Returns `true` while any part of the group on `side` is visible.
    pub fn shows(&self, side: Side) -> bool {
        match side {
            Side::Left => self.shows_left,
            Side::Right => self.shows_right,
        }
    }

    /// Replaces the items of the group on `side`.
    ///
    /// The old offset is meaningless once widths change, so on success the
    /// row is reset to [`SwipePhase::Closed`] immediately.
    pub fn set_items<I>(&mut self, side: Side, items: I) -> Result<(), SwipeError>
    where
        I: IntoIterator<Item = ActionItem<H>>,
    {
        match side {
            Side::Left => self.left.set_items(items)?,
            Side::Right => self.right.set_items(items)?,
        }
        self.reset();
        Ok(())
    }

    /// Jumps to the closed position and phase without animation.
    pub fn reset(&mut self) {
        self.set_phase(SwipePhase::Closed);
        self.apply_offset(self.closed_offset());
    }

    /// Enters [`SwipePhase::Dragging`].
    pub fn begin_drag(&mut self) {
        self.set_phase(SwipePhase::Dragging);
    }

    /// Moves the offset by `delta` as part of a drag and returns the new offset.
    ///
    /// Starts a drag if none is in progress. Moving into a side that is empty,
    /// or disabled and not already showing, snaps back to closed instead.
    pub fn drag_by(&mut self, delta: f64) -> f64 {
        self.begin_drag();
        let policy = self.policy();
        let closed = policy.closed_offset();
        let mut next = policy.clamp(self.offset + delta);
        let blocked_left =
            next < closed && (self.left.is_empty() || (!self.can_open_left && !self.shows_left));
        let blocked_right = next > closed
            && (self.right.is_empty() || (!self.can_open_right && !self.shows_right));
        if blocked_left || blocked_right {
            tracing::trace!(offset = next, "swipe into disabled side, snapping closed");
            next = closed;
        }
        self.apply_offset(next);
        self.offset
    }

    /// Ends a drag released with `velocity` (offset units per millisecond).
    ///
    /// The phase moves to the snap target. A settle into an empty or disabled
    /// side becomes a settle to closed. When the snap does not animate the
    /// offset is placed on the target immediately; otherwise the caller is
    /// expected to animate it there.
    pub fn end_drag(&mut self, velocity: f64) -> Snap {
        let policy = self.policy();
        let mut snap = policy.snap(self.offset, velocity);
        let allowed = match snap.dock {
            Dock::LeftOpen => self.may_open(Side::Left),
            Dock::RightOpen => self.may_open(Side::Right),
            Dock::Closed => true,
        };
        if !allowed {
            snap.dock = Dock::Closed;
            snap.target = policy.closed_offset();
        }
        self.set_phase(snap.dock.into());
        if !snap.animate {
            self.apply_offset(snap.target);
        }
        snap
    }

    /// Targets the open dock of `side` and returns its offset.
    ///
    /// Returns `None`, leaving the state untouched, if the group is empty or
    /// has zero total width. Programmatic expansion is not gated by
    /// [`can_open`](Self::can_open).
    pub fn expand(&mut self, side: Side) -> Option<f64> {
        if !self.has_extent(side) {
            return None;
        }
        let dock = match side {
            Side::Left => Dock::LeftOpen,
            Side::Right => Dock::RightOpen,
        };
        self.set_phase(dock.into());
        Some(self.policy().offset_for(dock))
    }

    /// Targets the closed dock and returns its offset.
    pub fn hide(&mut self) -> f64 {
        self.set_phase(SwipePhase::Closed);
        self.closed_offset()
    }

    /// Places the offset directly, clamped to the valid range.
    ///
    /// Used to drive animations and instant placements; drag guards do not
    /// apply and the phase is left alone.
    pub fn set_offset(&mut self, offset: f64) {
        let offset = self.policy().clamp(offset);
        self.apply_offset(offset);
    }

    /// Returns `true` if notifications are waiting to be drained.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Drains pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, SwipeEvent> {
        self.events.drain(..)
    }

    /// Discards pending notifications without delivering them.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn has_extent(&self, side: Side) -> bool {
        self.group(side).total_width() > 0.0
    }

    fn may_open(&self, side: Side) -> bool {
        self.has_extent(side) && self.can_open(side)
    }

    fn push_event(&mut self, event: SwipeEvent) {
        let kind = core::mem::discriminant(&event);
        let queued = self
            .events
            .iter()
            .position(|queued| core::mem::discriminant(queued) == kind)
            .map(|index| self.events.remove(index));
        let event = match (queued, event) {
            (Some(SwipeEvent::PhaseChanged { from, .. }), SwipeEvent::PhaseChanged { to, .. }) => {
                if from == to {
                    return;
                }
                SwipeEvent::PhaseChanged { from, to }
            }
            (_, event) => event,
        };
        self.events.push(event);
    }

    fn set_phase(&mut self, phase: SwipePhase) {
        if self.phase == phase {
            return;
        }
        let from = self.phase;
        self.phase = phase;
        tracing::debug!(?from, to = ?phase, "swipe phase changed");
        self.push_event(SwipeEvent::PhaseChanged { from, to: phase });
    }

    fn apply_offset(&mut self, offset: f64) {
        if offset != self.offset {
            tracing::trace!(offset, "swipe offset");
        }
        self.offset = offset;

        let progress = self.policy().progress_at(offset);
        let left_changed = self.left.set_progress(progress.left);
        let right_changed = self.right.set_progress(progress.right);
        if left_changed || right_changed {
            self.push_event(SwipeEvent::Progress(self.progress()));
        }

        let closed = self.closed_offset();
        let shows_left = offset < closed && !self.left.is_empty();
        let shows_right = offset > closed && !self.right.is_empty();
        if shows_left != self.shows_left || shows_right != self.shows_right {
            self.shows_left = shows_left;
            self.shows_right = shows_right;
            self.push_event(SwipeEvent::ButtonsShown {
                left: shows_left,
                right: shows_right,
            });
        }
    }
}
