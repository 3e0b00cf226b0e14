// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row controller wiring drag input, commands, and animations to a
//! [`SwipeState`].
//!
//! ## Usage
//!
//! 1) Create a [`RowCoordinator`] when the host binds a row, and call
//!    [`RowCoordinator::attach_content`] with the row's width.
//! 2) Assign buttons with [`RowCoordinator::set_left_buttons`] /
//!    [`RowCoordinator::set_right_buttons`].
//! 3) Feed pointer events (or pre-computed offset deltas) and call
//!    [`RowCoordinator::tick`] every frame while
//!    [`RowCoordinator::is_animating`] is `true`.
//! 4) Read [`RowCoordinator::layout`] and the groups' translations to
//!    position views, and drain [`RowCoordinator::drain_events`] for
//!    notifications.
//!
//! Peer coordination across rows is handled by [`SwipeRows`](crate::SwipeRows).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::{ActionItem, RowCoordinator, SwipePhase};
//!
//! let mut row: RowCoordinator<&str, u32> = RowCoordinator::default();
//! row.attach_content(320.0);
//! row.set_right_buttons([ActionItem::new("delete", 80.0)]).unwrap();
//!
//! // Swipe 70px to the left and release quickly.
//! row.pointer_down(Point::new(300.0, 10.0), 0);
//! row.pointer_move(Point::new(230.0, 10.0), 16);
//! row.pointer_up(20);
//! assert_eq!(row.phase(), SwipePhase::RightOpen);
//!
//! // Finish the settle animation.
//! row.tick(20);
//! row.tick(1_000);
//! assert!(!row.is_animating());
//! assert_eq!(row.layout().unwrap().content, -80.0..240.0);
//!
//! // A tap while open closes the row and is consumed.
//! assert!(row.tap());
//! row.tick(1_000);
//! row.tick(2_000);
//! assert_eq!(row.phase(), SwipePhase::Closed);
//! assert!(!row.tap_enabled());
//! ```

use alloc::vec::Drain;
use core::ops::Range;

use kurbo::Point;

use crate::config::SwipeConfig;
use crate::drag::SwipeDrag;
use crate::error::SwipeError;
use crate::group::{ActionGroup, ActionItem, Side};
use crate::motion::Motion;
use crate::policy::{RevealProgress, Snap};
use crate::state::{SwipeEvent, SwipePhase, SwipeState};

/// Positions of a row's moving parts along the row axis.
///
/// All spans are in row coordinates, where the row occupies
/// `0..content_extent`.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Where the row content currently sits.
    pub content: Range<f64>,
    /// Span of the left group, pinned to the row's leading edge.
    pub left_group: Range<f64>,
    /// Span of the right group, pinned to the row's trailing edge.
    pub right_group: Range<f64>,
}

/// Controller for a single swipeable row.
///
/// `H` is the button handle type and `L` identifies the hosting list, which
/// is only ever held by value and never dereferenced.
#[derive(Clone, Debug)]
pub struct RowCoordinator<H, L> {
    state: SwipeState<H>,
    content_extent: Option<f64>,
    host: Option<L>,
    motion: Option<Motion>,
    drag: SwipeDrag,
}

impl<H, L> Default for RowCoordinator<H, L> {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl<H, L> RowCoordinator<H, L> {
    /// Creates an unbound row with no content attached.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            state: SwipeState::new(config),
            content_extent: None,
            host: None,
            motion: None,
            drag: SwipeDrag::default(),
        }
    }

    /// The underlying state machine.
    pub fn state(&self) -> &SwipeState<H> {
        &self.state
    }

    /// Current configuration.
    pub fn config(&self) -> &SwipeConfig {
        self.state.config()
    }

    /// Sets the reveal distance needed to snap the left group open.
    pub fn set_left_trigger_offset(&mut self, offset: f64) {
        let config = self.config().with_left_trigger_offset(offset);
        self.state.set_config(config);
    }

    /// Sets the distance past closed needed to snap the right group open.
    pub fn set_right_trigger_offset(&mut self, offset: f64) {
        let config = self.config().with_right_trigger_offset(offset);
        self.state.set_config(config);
    }

    /// Attaches (or resizes) the row content.
    ///
    /// Buttons cannot be assigned before this is called. Resizing does not
    /// disturb the swipe offset.
    pub fn attach_content(&mut self, extent: f64) {
        self.content_extent = Some(extent.max(0.0));
    }

    /// Width of the attached content, if any.
    pub fn content_extent(&self) -> Option<f64> {
        self.content_extent
    }

    /// Replaces the left buttons and closes the row without animation.
    pub fn set_left_buttons<I>(&mut self, items: I) -> Result<(), SwipeError>
    where
        I: IntoIterator<Item = ActionItem<H>>,
    {
        self.set_buttons(Side::Left, items)
    }

    /// Replaces the right buttons and closes the row without animation.
    pub fn set_right_buttons<I>(&mut self, items: I) -> Result<(), SwipeError>
    where
        I: IntoIterator<Item = ActionItem<H>>,
    {
        self.set_buttons(Side::Right, items)
    }

    /// The left action group.
    pub fn left_buttons(&self) -> &ActionGroup<H> {
        self.state.group(Side::Left)
    }

    /// The right action group.
    pub fn right_buttons(&self) -> &ActionGroup<H> {
        self.state.group(Side::Right)
    }

    /// Whether user swipes may open the left group.
    pub fn can_open_left(&self) -> bool {
        self.state.can_open(Side::Left)
    }

    /// Enables or disables user swipes opening the left group.
    pub fn set_can_open_left(&mut self, enabled: bool) {
        self.state.set_can_open(Side::Left, enabled);
    }

    /// Whether user swipes may open the right group.
    pub fn can_open_right(&self) -> bool {
        self.state.can_open(Side::Right)
    }

    /// Enables or disables user swipes opening the right group.
    pub fn set_can_open_right(&mut self, enabled: bool) {
        self.state.set_can_open(Side::Right, enabled);
    }

    /// Returns `true` while any left button is visible.
    pub fn shows_left_buttons(&self) -> bool {
        self.state.shows_left_buttons()
    }

    /// Returns `true` while any right button is visible.
    pub fn shows_right_buttons(&self) -> bool {
        self.state.shows_right_buttons()
    }

    /// Current phase.
    pub fn phase(&self) -> SwipePhase {
        self.state.phase()
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.state.offset()
    }

    /// Current reveal progress.
    pub fn progress(&self) -> RevealProgress {
        self.state.progress()
    }

    /// Starts a drag, cancelling any in-flight animation.
    pub fn begin_drag(&mut self) {
        self.motion = None;
        self.state.begin_drag();
    }

    /// Applies a drag delta in offset units and returns the new offset.
    pub fn drag_moved(&mut self, delta: f64) -> f64 {
        self.motion = None;
        self.state.drag_by(delta)
    }

    /// Ends a drag released with `velocity` and starts the settle.
    pub fn end_drag(&mut self, velocity: f64) -> Snap {
        let snap = self.state.end_drag(velocity);
        if snap.animate {
            self.animate_to(snap.target);
        }
        snap
    }

    /// Pointer pressed on the row.
    pub fn pointer_down(&mut self, pos: Point, time_ms: u64) {
        self.drag.start(pos, time_ms);
    }

    /// Pointer moved; returns the new offset if the move swiped the row.
    ///
    /// The swipe only starts once the gesture locks horizontally, so vertical
    /// gestures pass through to the list.
    pub fn pointer_move(&mut self, pos: Point, time_ms: u64) -> Option<f64> {
        let delta = self.drag.update(pos, time_ms)?;
        if !self.state.is_dragging() {
            self.begin_drag();
        }
        Some(self.drag_moved(delta))
    }

    /// Pointer released; returns the snap if a swipe was in progress.
    pub fn pointer_up(&mut self, time_ms: u64) -> Option<Snap> {
        let velocity = self.drag.end(time_ms)?;
        self.state.is_dragging().then(|| self.end_drag(velocity))
    }

    /// Pointer gesture cancelled by the platform; settles without a fling.
    pub fn pointer_cancel(&mut self) -> Option<Snap> {
        self.drag = SwipeDrag::default();
        self.state.is_dragging().then(|| self.end_drag(0.0))
    }

    /// Reveals the left group. No-op if it has no width to reveal.
    pub fn expand_left(&mut self, animated: bool) {
        self.expand(Side::Left, animated);
    }

    /// Reveals the right group. No-op if it has no width to reveal.
    pub fn expand_right(&mut self, animated: bool) {
        self.expand(Side::Right, animated);
    }

    /// Closes the row if the left group is showing, otherwise reveals it.
    pub fn toggle_left(&mut self, animated: bool) {
        self.toggle(Side::Left, animated);
    }

    /// Closes the row if the right group is showing, otherwise reveals it.
    pub fn toggle_right(&mut self, animated: bool) {
        self.toggle(Side::Right, animated);
    }

    /// Closes the row if `side` is showing, otherwise reveals it.
    pub fn toggle(&mut self, side: Side, animated: bool) {
        if self.state.shows(side) {
            self.close(animated);
        } else {
            self.expand(side, animated);
        }
    }

    /// Closes the row.
    ///
    /// A non-animated close supersedes any in-flight animation; an animated
    /// one redirects it.
    pub fn close(&mut self, animated: bool) {
        let target = self.state.hide();
        self.move_to(target, animated);
    }

    /// Advances the in-flight animation to `now_ms`.
    ///
    /// Returns `true` while an animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };
        let (offset, done) = motion.sample(now_ms);
        if done {
            self.motion = None;
        }
        self.state.set_offset(offset);
        !done
    }

    /// Returns `true` while an animated transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Offset the in-flight animation is heading to.
    pub fn animation_target(&self) -> Option<f64> {
        self.motion.as_ref().map(Motion::target)
    }

    /// Binds the row to a host list, returning the previous host.
    ///
    /// Panning that list closes this row (see
    /// [`SwipeRows::host_panned`](crate::SwipeRows::host_panned)). Rebinding
    /// replaces the previous host, so repeated calls are harmless.
    pub fn bind_host(&mut self, host: L) -> Option<L> {
        self.host.replace(host)
    }

    /// Detaches the row from its host list.
    pub fn unbind_host(&mut self) -> Option<L> {
        self.host.take()
    }

    /// The host list this row is bound to.
    pub fn host(&self) -> Option<&L> {
        self.host.as_ref()
    }

    /// Hard reset before the row is reused for new content.
    ///
    /// Cancels drags and animations, jumps to closed, and discards
    /// notifications still pending from the previous content.
    pub fn recycle(&mut self) {
        self.motion = None;
        self.drag = SwipeDrag::default();
        self.state.reset();
        self.state.clear_events();
    }

    /// Whether taps should be intercepted to close the row.
    ///
    /// While fully closed taps are left alone so normal row selection works.
    pub fn tap_enabled(&self) -> bool {
        self.shows_left_buttons() || self.shows_right_buttons()
    }

    /// Handles a tap on the row content; returns `true` if it was consumed.
    pub fn tap(&mut self) -> bool {
        if !self.tap_enabled() {
            return false;
        }
        self.close(true);
        true
    }

    /// Returns `true` if any group is showing or an animation is opening one.
    pub fn is_revealing(&self) -> bool {
        self.tap_enabled()
            || self
                .animation_target()
                .is_some_and(|target| target != self.state.closed_offset())
    }

    /// Current row geometry, or `None` if no content is attached.
    pub fn layout(&self) -> Option<RowLayout> {
        let extent = self.content_extent?;
        let left_width = self.left_buttons().total_width();
        let right_width = self.right_buttons().total_width();
        let start = self.state.closed_offset() - self.state.offset();
        Some(RowLayout {
            content: start..start + extent,
            left_group: 0.0..left_width,
            right_group: extent - right_width..extent,
        })
    }

    /// Drains pending notifications, oldest first. See [`SwipeEvent`] for how
    /// undrained notifications are coalesced.
    pub fn drain_events(&mut self) -> Drain<'_, SwipeEvent> {
        self.state.drain_events()
    }

    fn set_buttons<I>(&mut self, side: Side, items: I) -> Result<(), SwipeError>
    where
        I: IntoIterator<Item = ActionItem<H>>,
    {
        if self.content_extent.is_none() {
            return Err(SwipeError::ContentNotAttached { side });
        }
        self.state.set_items(side, items)?;
        self.motion = None;
        Ok(())
    }

    fn expand(&mut self, side: Side, animated: bool) {
        if let Some(target) = self.state.expand(side) {
            self.move_to(target, animated);
        }
    }

    fn move_to(&mut self, target: f64, animated: bool) {
        if animated {
            self.animate_to(target);
        } else {
            self.motion = None;
            self.state.set_offset(target);
        }
    }

    fn animate_to(&mut self, target: f64) {
        if self.animation_target() == Some(target) {
            return;
        }
        if self.motion.is_none() && self.state.offset() == target {
            return;
        }
        let duration = self.config().animation_duration_ms;
        self.motion = Some(Motion::new(self.state.offset(), target, duration));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Dock;

    fn row(left: f64, right: f64) -> RowCoordinator<u8, u32> {
        let mut row = RowCoordinator::default();
        row.attach_content(300.0);
        row.set_left_buttons([ActionItem::new(0, left)]).unwrap();
        row.set_right_buttons([ActionItem::new(1, right)]).unwrap();
        row.drain_events();
        row
    }

    fn settle(row: &mut RowCoordinator<u8, u32>) {
        row.tick(0);
        row.tick(10_000);
    }

    #[test]
    fn buttons_require_content() {
        let mut row = RowCoordinator::<u8, u32>::default();
        assert_eq!(
            row.set_right_buttons([ActionItem::new(1, 10.0)]),
            Err(SwipeError::ContentNotAttached { side: Side::Right })
        );
        row.attach_content(100.0);
        assert!(row.set_right_buttons([ActionItem::new(1, 10.0)]).is_ok());
    }

    #[test]
    fn slow_release_places_instantly() {
        let mut row = row(50.0, 100.0);
        row.begin_drag();
        row.drag_moved(150.0);
        let snap = row.end_drag(0.05);
        assert!(!snap.animate);
        assert!(!row.is_animating());
        assert_eq!(row.offset(), 150.0);
        assert_eq!(row.phase(), SwipePhase::RightOpen);
    }

    #[test]
    fn fast_release_animates_to_target() {
        let mut row = row(50.0, 100.0);
        row.begin_drag();
        assert_eq!(row.drag_moved(150.0), 150.0);
        assert_eq!(row.progress().right, 1.0);
        let snap = row.end_drag(0.5);
        assert!(snap.animate);
        assert_eq!(snap.target, 150.0);
        assert_eq!(row.animation_target(), None, "already at the target");
        assert_eq!(row.phase(), SwipePhase::RightOpen);

        row.drag_moved(-60.0);
        row.end_drag(-2.0);
        assert_eq!(row.animation_target(), Some(50.0));
        assert!(row.tick(100));
        assert!(row.tick(200));
        assert!(!row.tick(400));
        assert_eq!(row.offset(), 50.0);
        assert_eq!(row.phase(), SwipePhase::Closed);
    }

    #[test]
    fn new_target_redirects_animation() {
        let mut row = row(50.0, 100.0);
        row.expand_right(true);
        row.tick(0);
        row.tick(100);
        let mid = row.offset();
        assert!(mid > 50.0 && mid < 150.0);

        row.expand_right(true);
        assert_eq!(row.animation_target(), Some(150.0));

        row.expand_left(true);
        assert_eq!(row.animation_target(), Some(0.0));
        assert_eq!(row.phase(), SwipePhase::LeftOpen);
        row.tick(100);
        assert_eq!(row.offset(), mid, "redirect starts from the current offset");
        settle(&mut row);
        assert_eq!(row.state().dock(), Dock::LeftOpen);
    }

    #[test]
    fn drag_cancels_animation() {
        let mut row = row(50.0, 100.0);
        row.expand_right(true);
        row.tick(0);
        row.tick(50);
        row.begin_drag();
        assert!(!row.is_animating());
    }

    #[test]
    fn toggle_closes_or_expands() {
        let mut row = row(50.0, 100.0);
        row.toggle_left(false);
        assert_eq!(row.offset(), 0.0);
        assert!(row.shows_left_buttons());
        row.toggle_left(false);
        assert_eq!(row.offset(), 50.0);
        row.toggle_right(false);
        assert_eq!(row.offset(), 150.0);
        row.toggle_left(false);
        assert_eq!(row.offset(), 0.0);
    }

    #[test]
    fn non_animated_close_supersedes_animation() {
        let mut row = row(50.0, 100.0);
        row.expand_right(true);
        row.tick(0);
        row.tick(100);
        row.close(false);
        assert!(!row.is_animating());
        assert_eq!(row.offset(), 50.0);
        assert_eq!(row.phase(), SwipePhase::Closed);
    }

    #[test]
    fn recycle_hard_resets() {
        let mut row = row(50.0, 100.0);
        row.pointer_down(Point::new(200.0, 5.0), 0);
        row.pointer_move(Point::new(150.0, 5.0), 10);
        row.expand_left(true);
        row.recycle();
        assert_eq!(row.phase(), SwipePhase::Closed);
        assert_eq!(row.offset(), 50.0);
        assert!(!row.is_animating());
        assert_eq!(row.pointer_up(20), None);
    }

    #[test]
    fn recycle_discards_stale_events() {
        let mut row = row(50.0, 100.0);
        row.begin_drag();
        row.drag_moved(80.0);
        row.recycle();
        assert_eq!(row.drain_events().count(), 0);

        row.expand_right(false);
        assert!(row.drain_events().count() > 0);
    }

    #[test]
    fn zero_width_side_cannot_be_expanded() {
        let mut row = RowCoordinator::<u8, u32>::default();
        row.attach_content(300.0);
        row.set_left_buttons([ActionItem::new(0, 40.0)]).unwrap();
        row.set_right_buttons([ActionItem::new(1, 0.0)]).unwrap();

        row.expand_right(false);
        assert_eq!(row.phase(), SwipePhase::Closed);
        assert_eq!(row.state().dock(), Dock::Closed);
        row.toggle_right(true);
        assert!(!row.is_animating());
        assert_eq!(row.phase(), SwipePhase::Closed);
        assert_eq!(row.offset(), 40.0);
    }

    #[test]
    fn vertical_gesture_leaves_row_alone() {
        let mut row = row(50.0, 100.0);
        row.pointer_down(Point::new(100.0, 100.0), 0);
        assert_eq!(row.pointer_move(Point::new(101.0, 140.0), 10), None);
        assert_eq!(row.phase(), SwipePhase::Closed);
        assert_eq!(row.pointer_up(20), None);
    }

    #[test]
    fn pointer_swipe_opens_left() {
        let mut row = row(50.0, 100.0);
        row.pointer_down(Point::new(10.0, 0.0), 0);
        assert_eq!(row.pointer_move(Point::new(40.0, 0.0), 100), Some(20.0));
        assert_eq!(row.phase(), SwipePhase::Dragging);
        let snap = row.pointer_up(150).unwrap();
        assert_eq!(snap.dock, Dock::LeftOpen);
        assert!(snap.animate);
        settle(&mut row);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.layout().unwrap().content, 50.0..350.0);
    }

    #[test]
    fn cancel_settles_without_fling() {
        let mut row = row(50.0, 100.0);
        row.pointer_down(Point::new(200.0, 0.0), 0);
        row.pointer_move(Point::new(100.0, 0.0), 5);
        let snap = row.pointer_cancel().unwrap();
        assert!(!snap.animate);
        assert_eq!(row.offset(), 150.0);
    }

    #[test]
    fn tap_only_consumed_while_showing() {
        let mut row = row(50.0, 100.0);
        assert!(!row.tap());
        row.expand_right(false);
        assert!(row.tap_enabled());
        assert!(row.tap());
        assert_eq!(row.animation_target(), Some(50.0));
        settle(&mut row);
        assert!(!row.tap_enabled());
    }

    #[test]
    fn layout_pins_groups_to_edges() {
        let mut row = row(40.0, 60.0);
        let layout = row.layout().unwrap();
        assert_eq!(layout.content, 0.0..300.0);
        assert_eq!(layout.left_group, 0.0..40.0);
        assert_eq!(layout.right_group, 240.0..300.0);

        row.expand_right(false);
        assert_eq!(row.layout().unwrap().content, -60.0..240.0);
    }

    #[test]
    fn host_binding_is_replaced() {
        let mut row = row(40.0, 60.0);
        assert_eq!(row.bind_host(1), None);
        assert_eq!(row.bind_host(2), Some(1));
        assert_eq!(row.bind_host(2), Some(2));
        assert_eq!(row.host(), Some(&2));
        assert_eq!(row.unbind_host(), Some(2));
        assert_eq!(row.host(), None);
    }

    #[test]
    fn trigger_offsets_are_configurable() {
        let mut row = row(50.0, 100.0);
        row.set_right_trigger_offset(10.0);
        row.drag_moved(15.0);
        assert_eq!(row.end_drag(0.0).dock, Dock::RightOpen);

        row.set_left_trigger_offset(5.0);
        row.close(false);
        row.drag_moved(-40.0);
        assert_eq!(row.end_drag(0.0).dock, Dock::Closed);
    }
}
