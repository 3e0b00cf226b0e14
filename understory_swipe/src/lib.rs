// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a headless swipe-to-reveal engine for list rows.
//!
//! A swipeable row hides action buttons behind its content on the left
//! and/or right. Dragging the content sideways reveals them, and on release
//! the row snaps to one of three docked positions: closed, left-open, or
//! right-open. This crate models that interaction without owning any views:
//!
//! - [`ActionGroup`]: the ordered buttons on one side, their total width, and
//!   the staggered per-item translation at a given reveal progress.
//! - [`OffsetPolicy`]: pure functions mapping a drag offset to a clamped
//!   offset, per-group [`RevealProgress`], and the [`Snap`] target on release.
//! - [`SwipeState`]: the state machine owning both groups, the offset, and the
//!   `can_open_*` flags, emitting [`SwipeEvent`]s as things change.
//! - [`RowCoordinator`]: the per-row controller that turns pointer input
//!   (via [`SwipeDrag`]) and commands into state changes and animated
//!   [`Motion`]s, and reports a [`RowLayout`].
//! - [`SwipeRows`] and [`PeerRegistry`]: host-side storage that keeps at most
//!   one row open per list, closes rows when their list is panned, and hands
//!   out generational [`RowId`]s that fail safely once a row is gone.
//!
//! ## Offsets
//!
//! The swipe offset is one-dimensional. Its origin is the fully left-revealed
//! position; closed is `left_width` and fully right-revealed is
//! `left_width + right_width`. Offsets grow as the content moves left.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_swipe::{ActionItem, RowCoordinator, SwipePhase};
//!
//! let mut row: RowCoordinator<&str, ()> = RowCoordinator::default();
//! row.attach_content(375.0);
//! row.set_left_buttons([ActionItem::new("pin", 50.0)]).unwrap();
//! row.set_right_buttons([ActionItem::new("more", 60.0), ActionItem::new("delete", 40.0)])
//!     .unwrap();
//!
//! // Drag far to the left: the offset is clamped to the fully revealed position.
//! row.begin_drag();
//! row.drag_moved(150.0);
//! assert_eq!(row.offset(), 150.0);
//! assert_eq!(row.progress().right, 1.0);
//!
//! // A quick release animates the settle.
//! let snap = row.end_drag(0.5);
//! assert!(snap.animate);
//! assert_eq!(row.phase(), SwipePhase::RightOpen);
//! ```
//!
//! ## Integration
//!
//! Host frameworks are responsible for:
//!
//! - Creating the button views and positioning them from
//!   [`RowCoordinator::layout`] and each group's [`ActionGroup::item_span`].
//! - Routing pointer events to the row and list pan events to
//!   [`SwipeRows::host_panned`].
//! - Calling [`SwipeRows::tick`] each frame while it returns `true`.
//!
//! Diagnostics are emitted through `tracing` at `debug` and `trace` levels;
//! install any subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod drag;
mod error;
mod group;
mod motion;
mod peer;
mod policy;
mod row;
mod rows;
mod state;

pub use config::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_FLING_VELOCITY, DEFAULT_TRIGGER_OFFSET, SwipeConfig,
};
pub use drag::{DragAxis, SwipeDrag};
pub use error::SwipeError;
pub use group::{ActionGroup, ActionItem, Side};
pub use motion::Motion;
pub use peer::{PeerRegistry, RowId};
pub use policy::{Dock, OffsetPolicy, RevealProgress, Snap};
pub use row::{RowCoordinator, RowLayout};
pub use rows::SwipeRows;
pub use state::{SwipeEvent, SwipePhase, SwipeState};
