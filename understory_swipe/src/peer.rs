// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Peer coordination: at most one open row per list.

use core::hash::Hash;

use hashbrown::HashMap;

/// Identifier for a row owned by [`SwipeRows`](crate::SwipeRows).
///
/// A small, copyable handle made of a slot index and a generation counter.
/// Removing a row frees its slot; reusing the slot bumps the generation, so a
/// stale `RowId` never aliases a newer row. Lookups through a stale id fail
/// safely instead of reaching whatever row lives in the slot now.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RowId(pub(crate) u32, pub(crate) u32);

impl RowId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Records the currently open row of each list context.
///
/// Holds row ids only; it never owns or dereferences rows, and it tolerates
/// rows being destroyed without unregistering. Closing is delegated to the
/// caller through a callback, which lets the registry live next to whatever
/// storage owns the rows.
///
/// ```
/// use understory_swipe::{RowCoordinator, SwipeRows};
///
/// // `SwipeRows` hands out the ids the registry stores.
/// let mut rows: SwipeRows<(), u8> = SwipeRows::new();
/// let a = rows.insert(RowCoordinator::default());
/// let b = rows.insert(RowCoordinator::default());
///
/// let mut registry = understory_swipe::PeerRegistry::new();
/// registry.notify_opening(7_u8, a, |_| unreachable!());
///
/// let mut closed = Vec::new();
/// registry.notify_opening(7, b, |previous| closed.push(previous));
/// assert_eq!(closed, [a]);
/// assert_eq!(registry.open_row(7), Some(b));
/// ```
#[derive(Clone, Debug)]
pub struct PeerRegistry<L> {
    open: HashMap<L, RowId>,
}

impl<L> Default for PeerRegistry<L> {
    fn default() -> Self {
        Self {
            open: HashMap::new(),
        }
    }
}

impl<L: Copy + Eq + Hash> PeerRegistry<L> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The row recorded as open in `list`, if any.
    ///
    /// The row may have been destroyed since it was recorded.
    pub fn open_row(&self, list: L) -> Option<RowId> {
        self.open.get(&list).copied()
    }

    /// Records `row` as the open row of `list`.
    ///
    /// If a different row was open there, `close` is called with it first.
    /// Returns the row that was closed.
    pub fn notify_opening(
        &mut self,
        list: L,
        row: RowId,
        close: impl FnOnce(RowId),
    ) -> Option<RowId> {
        let previous = self.open.insert(list, row).filter(|previous| *previous != row);
        if let Some(previous) = previous {
            close(previous);
        }
        previous
    }

    /// Clears the entry for `list` if it points at `row`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn notify_closed(&mut self, list: L, row: RowId) -> bool {
        if self.open.get(&list) == Some(&row) {
            self.open.remove(&list);
            true
        } else {
            false
        }
    }

    /// Number of lists with an open row recorded.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if no list has an open row recorded.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const A: RowId = RowId::new(0, 1);
    const B: RowId = RowId::new(1, 1);
    const C: RowId = RowId::new(2, 1);

    #[test]
    fn first_opening_closes_nothing() {
        let mut registry = PeerRegistry::new();
        assert_eq!(registry.notify_opening(1_u32, A, |_| panic!("nothing to close")), None);
        assert_eq!(registry.open_row(1), Some(A));
    }

    #[test]
    fn opening_closes_previous_in_same_list() {
        let mut registry = PeerRegistry::new();
        registry.notify_opening(1_u32, A, |_| {});
        let mut closed = Vec::new();
        assert_eq!(registry.notify_opening(1, B, |id| closed.push(id)), Some(A));
        assert_eq!(closed, [A]);
        assert_eq!(registry.open_row(1), Some(B));
    }

    #[test]
    fn reopening_same_row_is_a_no_op() {
        let mut registry = PeerRegistry::new();
        registry.notify_opening(1_u32, A, |_| {});
        assert_eq!(registry.notify_opening(1, A, |_| panic!("same row")), None);
    }

    #[test]
    fn lists_are_independent() {
        let mut registry = PeerRegistry::new();
        registry.notify_opening(1_u32, A, |_| {});
        registry.notify_opening(2, B, |_| panic!("different list"));
        assert_eq!(registry.open_row(1), Some(A));
        assert_eq!(registry.open_row(2), Some(B));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn closed_only_clears_matching_row() {
        let mut registry = PeerRegistry::new();
        registry.notify_opening(1_u32, A, |_| {});
        assert!(!registry.notify_closed(1, C));
        assert_eq!(registry.open_row(1), Some(A));
        assert!(registry.notify_closed(1, A));
        assert!(registry.is_empty());
        assert!(!registry.notify_closed(1, A));
    }

    #[test]
    fn row_id_parts() {
        let id = RowId::new(4, 9);
        assert_eq!(id.idx(), 4);
        assert_eq!(id.generation(), 9);
    }
}
