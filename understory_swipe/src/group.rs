// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action groups: the ordered buttons revealed on one side of a row.
//!
//! A group owns no views. It records each item's width, the group's total
//! width, and a reveal progress in `[0, 1]`, and derives from those the live
//! translation of every item. Right-hand items are anchored at the group's
//! leading edge and left-hand items at its trailing edge, so at progress `0`
//! they are stacked on top of each other and at progress `1` they sit side by
//! side in display order.
//!
//! ```
//! use understory_swipe::{ActionGroup, ActionItem, Side};
//!
//! let mut group = ActionGroup::new(Side::Right);
//! group
//!     .set_items([ActionItem::new("archive", 60.0), ActionItem::new("delete", 80.0)])
//!     .unwrap();
//! assert_eq!(group.total_width(), 140.0);
//!
//! group.set_progress(0.5);
//! // The second item travels half of the first item's width.
//! assert_eq!(group.translation(1), Some(30.0));
//! assert_eq!(group.item_span(1), Some(30.0..110.0));
//! ```

use core::ops::Range;

use smallvec::SmallVec;

use crate::error::SwipeError;

/// Which edge of the row a group is revealed from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Revealed by dragging the content to the right.
    Left,
    /// Revealed by dragging the content to the left.
    Right,
}

/// One action button: an opaque handle plus its intrinsic width.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionItem<H> {
    /// Host handle for the button (a view id, a widget key, ...).
    pub handle: H,
    /// Intrinsic width of the button.
    pub width: f64,
}

impl<H> ActionItem<H> {
    /// Creates an item with the given handle and width.
    pub const fn new(handle: H, width: f64) -> Self {
        Self { handle, width }
    }
}

/// An ordered sequence of action items on one side of a row.
#[derive(Clone, Debug)]
pub struct ActionGroup<H> {
    side: Side,
    items: SmallVec<[ActionItem<H>; 4]>,
    translations: SmallVec<[f64; 4]>,
    total_width: f64,
    progress: f64,
}

impl<H> ActionGroup<H> {
    /// Creates an empty group for the given side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            items: SmallVec::new(),
            translations: SmallVec::new(),
            total_width: 0.0,
            progress: 0.0,
        }
    }

    /// The side this group is revealed from.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Items in display order, left to right.
    pub fn items(&self) -> &[ActionItem<H>] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group has no items and can therefore never open.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item widths.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Current reveal progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Replaces all items.
    ///
    /// On success the total width is recomputed, progress is reset to `0`,
    /// and every item translation is laid out again. A negative or non-finite
    /// width is rejected and the group is left untouched.
    pub fn set_items<I>(&mut self, items: I) -> Result<(), SwipeError>
    where
        I: IntoIterator<Item = ActionItem<H>>,
    {
        let items: SmallVec<[ActionItem<H>; 4]> = items.into_iter().collect();
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| !item.width.is_finite() || item.width < 0.0)
        {
            return Err(SwipeError::InvalidWidth {
                side: self.side,
                index,
                width: item.width,
            });
        }
        self.total_width = items.iter().map(|item| item.width).sum();
        self.items = items;
        self.progress = 0.0;
        self.relayout();
        Ok(())
    }

    /// Removes all items; equivalent to setting an empty sequence.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_width = 0.0;
        self.progress = 0.0;
        self.relayout();
    }

    /// Cumulative width of the items ahead of `index` in the reveal direction.
    ///
    /// For the right group these are the items before `index`, for the left
    /// group the items after it; the item nearest the content moves least.
    pub fn offset_for_item(&self, index: usize) -> Option<f64> {
        if index >= self.items.len() {
            return None;
        }
        let ahead = match self.side {
            Side::Right => &self.items[..index],
            Side::Left => &self.items[index + 1..],
        };
        Some(ahead.iter().map(|item| item.width).sum())
    }

    /// Sets the reveal progress, clamped into `[0, 1]`, and relays out items.
    ///
    /// `NaN` is treated as `0`. Returns `true` if the progress changed.
    pub fn set_progress(&mut self, progress: f64) -> bool {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if progress == self.progress {
            return false;
        }
        self.progress = progress;
        self.relayout();
        true
    }

    /// Live translation of the item at `index` along the row axis.
    ///
    /// Right items move towards positive coordinates, left items towards
    /// negative ones.
    pub fn translation(&self, index: usize) -> Option<f64> {
        self.translations.get(index).copied()
    }

    /// Live translations of all items, in display order.
    pub fn translations(&self) -> &[f64] {
        &self.translations
    }

    /// Extent of the item at `index` in group-local coordinates.
    ///
    /// The group spans `0..total_width`.
    pub fn item_span(&self, index: usize) -> Option<Range<f64>> {
        let width = self.items.get(index)?.width;
        let translation = self.translations[index];
        Some(match self.side {
            Side::Right => translation..translation + width,
            Side::Left => {
                let end = self.total_width + translation;
                end - width..end
            }
        })
    }

    /// Iterates `(handle, span)` pairs in display order.
    pub fn layout(&self) -> impl Iterator<Item = (&H, Range<f64>)> + '_ {
        self.items.iter().enumerate().filter_map(|(index, item)| {
            self.item_span(index).map(|span| (&item.handle, span))
        })
    }

    fn relayout(&mut self) {
        let sign = match self.side {
            Side::Right => 1.0,
            Side::Left => -1.0,
        };
        let mut translations = SmallVec::with_capacity(self.items.len());
        for index in 0..self.items.len() {
            let offset = self.offset_for_item(index).unwrap_or_default();
            translations.push(sign * offset * self.progress);
        }
        self.translations = translations;
    }
}
