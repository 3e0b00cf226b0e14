// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::group::Side;

/// Configuration errors reported while setting up a swipe row.
///
/// These describe programmer mistakes made at setup time (buttons assigned in
/// the wrong order, nonsensical widths). They are not expected during normal
/// interaction, and callers generally treat them as fatal.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SwipeError {
    /// Action buttons were assigned before the row's content was attached.
    ///
    /// See [`RowCoordinator::attach_content`](crate::RowCoordinator::attach_content).
    #[error("row content must be attached before {side:?} action buttons are set")]
    ContentNotAttached {
        /// The side whose buttons were being assigned.
        side: Side,
    },
    /// An action item was given a negative or non-finite width.
    #[error("action item {index} on the {side:?} side has invalid width {width}")]
    InvalidWidth {
        /// The group the item was destined for.
        side: Side,
        /// Position of the offending item in the supplied sequence.
        index: usize,
        /// The rejected width.
        width: f64,
    },
}
