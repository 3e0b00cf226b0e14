// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side storage for rows, with peer coordination applied after every
//! mutation.
//!
//! [`SwipeRows`] owns [`RowCoordinator`]s behind generational [`RowId`]s and
//! keeps a [`PeerRegistry`] in step with them. The host list calls into it
//! from its lifecycle hooks:
//!
//! | Host event               | Call                           |
//! |--------------------------|--------------------------------|
//! | row bound to content     | [`SwipeRows::insert`]          |
//! | row about to display     | [`SwipeRows::will_display`]    |
//! | row recycled             | [`SwipeRows::recycle`]         |
//! | row discarded            | [`SwipeRows::remove`]          |
//! | list scrolled / panned   | [`SwipeRows::host_panned`]     |
//! | animation frame          | [`SwipeRows::tick`]            |
//!
//! Any other interaction with a row goes through [`SwipeRows::update`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::{ActionItem, RowCoordinator, SwipePhase, SwipeRows};
//!
//! let mut rows: SwipeRows<&str, u32> = SwipeRows::new();
//! let mut make_row = || {
//!     let mut row = RowCoordinator::default();
//!     row.attach_content(320.0);
//!     row.set_right_buttons([ActionItem::new("delete", 80.0)]).unwrap();
//!     rows.insert(row)
//! };
//! let a = make_row();
//! let b = make_row();
//! rows.will_display(a, 1);
//! rows.will_display(b, 1);
//!
//! rows.update(a, |row| row.expand_right(false));
//! assert_eq!(rows.open_row(1), Some(a));
//!
//! // Opening `b` closes `a` straight away.
//! rows.update(b, |row| row.expand_right(false));
//! assert_eq!(rows.get(a).unwrap().phase(), SwipePhase::Closed);
//! assert_eq!(rows.open_row(1), Some(b));
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use crate::peer::{PeerRegistry, RowId};
use crate::row::RowCoordinator;

#[derive(Clone, Debug)]
struct Slot<H, L> {
    generation: u32,
    row: Option<RowCoordinator<H, L>>,
}

/// Generational storage for the rows of one or more lists.
#[derive(Clone, Debug)]
pub struct SwipeRows<H, L> {
    slots: Vec<Slot<H, L>>,
    free: Vec<u32>,
    registry: PeerRegistry<L>,
}

impl<H, L> Default for SwipeRows<H, L> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            registry: PeerRegistry::default(),
        }
    }
}

impl<H, L: Copy + Eq + Hash + core::fmt::Debug> SwipeRows<H, L> {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a newly bound row and returns its id.
    pub fn insert(&mut self, row: RowCoordinator<H, L>) -> RowId {
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.row = Some(row);
            RowId::new(idx, slot.generation)
        } else {
            let idx =
                u32::try_from(self.slots.len()).expect("SwipeRows: too many rows for u32 RowId");
            self.slots.push(Slot {
                generation: 1,
                row: Some(row),
            });
            RowId::new(idx, 1)
        };
        self.sync(id);
        id
    }

    /// Discards a row, returning it if `id` was live.
    ///
    /// The registry is deliberately left alone; a stale entry is ignored by
    /// [`open_row`](Self::open_row) and replaced on the next opening.
    pub fn remove(&mut self, id: RowId) -> Option<RowCoordinator<H, L>> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        let row = slot.row.take()?;
        self.free.push(id.0);
        Some(row)
    }

    /// Returns `true` if `id` refers to a live row.
    pub fn is_alive(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    /// The row for `id`, or `None` if it is stale.
    pub fn get(&self, id: RowId) -> Option<&RowCoordinator<H, L>> {
        live(&self.slots, id)
    }

    /// Runs `f` on a row and then applies peer coordination.
    ///
    /// Returns `None` without calling `f` if `id` is stale.
    pub fn update<R>(
        &mut self,
        id: RowId,
        f: impl FnOnce(&mut RowCoordinator<H, L>) -> R,
    ) -> Option<R> {
        let result = f(live_mut(&mut self.slots, id)?);
        self.sync(id);
        Some(result)
    }

    /// Rebinds a row to the list it is about to be displayed in.
    ///
    /// If the row was recorded as open in a different list, that entry is
    /// cleared. Returns `false` if `id` is stale.
    pub fn will_display(&mut self, id: RowId, list: L) -> bool {
        let Some(row) = live_mut(&mut self.slots, id) else {
            return false;
        };
        if let Some(previous) = row.bind_host(list)
            && previous != list
        {
            tracing::debug!(?previous, ?list, "row moved to a different list");
            self.registry.notify_closed(previous, id);
        }
        self.sync(id);
        true
    }

    /// Hard-resets a row before it is reused. Returns `false` if `id` is stale.
    pub fn recycle(&mut self, id: RowId) -> bool {
        self.update(id, RowCoordinator::recycle).is_some()
    }

    /// The list itself was panned: close every row bound to it, animated.
    pub fn host_panned(&mut self, list: L) {
        for idx in 0..self.slots.len() {
            let Some(row) = self.slots[idx].row.as_mut() else {
                continue;
            };
            if row.host() == Some(&list) && row.is_revealing() {
                row.close(true);
                let id = self.id_at(idx);
                self.sync(id);
            }
        }
    }

    /// Advances every row's animation. Returns `true` while any is running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut animating = false;
        for idx in 0..self.slots.len() {
            let Some(row) = self.slots[idx].row.as_mut() else {
                continue;
            };
            if !row.is_animating() {
                continue;
            }
            animating |= row.tick(now_ms);
            let id = self.id_at(idx);
            self.sync(id);
        }
        animating
    }

    /// The live row currently open in `list`, if any.
    pub fn open_row(&self, list: L) -> Option<RowId> {
        self.registry
            .open_row(list)
            .filter(|id| self.is_alive(*id))
    }

    /// The peer registry.
    pub fn registry(&self) -> &PeerRegistry<L> {
        &self.registry
    }

    /// Number of live rows.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns `true` if there are no live rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of all live rows, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        (0..self.slots.len())
            .filter(|idx| self.slots[*idx].row.is_some())
            .map(|idx| self.id_at(idx))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "insert never lets the slot count exceed u32"
    )]
    fn id_at(&self, idx: usize) -> RowId {
        RowId::new(idx as u32, self.slots[idx].generation)
    }

    fn sync(&mut self, id: RowId) {
        let Some(row) = live(&self.slots, id) else {
            return;
        };
        let Some(list) = row.host().copied() else {
            return;
        };
        if !row.is_revealing() {
            self.registry.notify_closed(list, id);
            return;
        }
        let Self {
            slots, registry, ..
        } = self;
        registry.notify_opening(list, id, |previous| {
            if let Some(peer) = live_mut(slots, previous) {
                tracing::debug!(?previous, opening = ?id, ?list, "closing peer row");
                peer.close(false);
            }
        });
    }
}

fn live<H, L>(slots: &[Slot<H, L>], id: RowId) -> Option<&RowCoordinator<H, L>> {
    let slot = slots.get(id.idx())?;
    if slot.generation != id.generation() {
        return None;
    }
    slot.row.as_ref()
}

fn live_mut<H, L>(slots: &mut [Slot<H, L>], id: RowId) -> Option<&mut RowCoordinator<H, L>> {
    let slot = slots.get_mut(id.idx())?;
    if slot.generation != id.generation() {
        return None;
    }
    slot.row.as_mut()
}
