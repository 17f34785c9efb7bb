//! Sorted registry keyed by lattice address.

use std::slice;

use crate::address::LatticeAddress;

/// Record stored in a [`SortedRegistry`].
pub(crate) trait Keyed {
    fn key(&self) -> &LatticeAddress;
}

/// Result of a binary search: exact match or insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Occupied(usize),
    Vacant(usize),
}

/// Records kept in ascending address order.
///
/// Lookup is a binary search; insertion happens at the search-determined
/// position, so the order invariant holds without re-sorting.
#[derive(Debug, Clone)]
pub(crate) struct SortedRegistry<V> {
    entries: Vec<V>,
}

impl<V: Keyed> SortedRegistry<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn locate(&self, key: &LatticeAddress) -> Slot {
        match self.entries.binary_search_by(|entry| entry.key().cmp(key)) {
            Ok(index) => Slot::Occupied(index),
            Err(index) => Slot::Vacant(index),
        }
    }

    pub(crate) fn get(&self, key: &LatticeAddress) -> Option<&V> {
        match self.locate(key) {
            Slot::Occupied(index) => self.entries.get(index),
            Slot::Vacant(_) => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: &LatticeAddress) -> Option<&mut V> {
        match self.locate(key) {
            Slot::Occupied(index) => self.entries.get_mut(index),
            Slot::Vacant(_) => None,
        }
    }

    #[inline]
    pub(crate) fn at(&self, index: usize) -> &V {
        &self.entries[index]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, index: usize) -> &mut V {
        &mut self.entries[index]
    }

    /// Insert at a vacant slot returned by [`Self::locate`].
    pub(crate) fn insert_at(&mut self, index: usize, entry: V) -> &mut V {
        debug_assert!(index == 0 || self.entries[index - 1].key() < entry.key());
        debug_assert!(index == self.entries.len() || entry.key() < self.entries[index].key());
        self.entries.insert(index, entry);
        &mut self.entries[index]
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, V> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, V> {
        self.entries.iter_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
