//! Position bookkeeping for stored elements
//!
//! Maps each element to the ordered list of storage indices at which it
//! currently resides, so `update_priority` can locate elements without
//! scanning the heap array. Duplicate elements are supported as multiple
//! index entries under one key.
//!
//! A single-valued map would be insufficient: duplicate-valued elements are
//! common in relaxation workloads (tied distances), so each key maps to a
//! small ordered list. Removal is by index value, O(k) in the duplicate
//! count k, which stays tiny in practice.

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};
use std::hash::Hash;

/// Inline capacity for per-element index lists. Duplicates are sparse, so
/// two slots cover the common cases without spilling to the heap.
type IndexList = SmallVec<[usize; 2]>;

/// Multi-valued index from element to storage positions.
///
/// Elements are keyed by `Eq`/`Hash`; the caller controls the identity
/// notion through its choice of impls.
#[derive(Debug, Clone, Default)]
pub(crate) struct PositionIndex<T> {
    map: FxHashMap<T, IndexList>,
}

impl<T: Clone + Eq + Hash> PositionIndex<T> {
    pub(crate) fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Reserves room for at least `additional` distinct elements.
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Records that `elem` now occupies `index`.
    ///
    /// When `prev_index` is given and present among the element's entries,
    /// that entry is replaced in place; otherwise the index is appended.
    /// Other elements' entries are untouched.
    pub(crate) fn record(&mut self, elem: &T, index: usize, prev_index: Option<usize>) {
        match self.map.get_mut(elem) {
            Some(entry) => {
                if let Some(prev) = prev_index {
                    if let Some(slot) = entry.iter().position(|&i| i == prev) {
                        entry[slot] = index;
                        return;
                    }
                }
                entry.push(index);
            }
            None => {
                self.map.insert(elem.clone(), smallvec![index]);
            }
        }
    }

    /// Removes exactly one occurrence of `index` from `elem`'s entries.
    ///
    /// Emptied lists are dropped from the map so that `lookup` reports the
    /// element as absent.
    pub(crate) fn release(&mut self, elem: &T, index: usize) {
        if let Some(entry) = self.map.get_mut(elem) {
            if let Some(slot) = entry.iter().position(|&i| i == index) {
                entry.remove(slot);
            }
            if entry.is_empty() {
                self.map.remove(elem);
            }
        }
    }

    /// All indices currently recorded for `elem`, in recording order
    /// (not necessarily sorted). Empty when the element is absent.
    pub(crate) fn lookup(&self, elem: &T) -> &[usize] {
        self.map.get(elem).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn contains(&self, elem: &T) -> bool {
        self.map.contains_key(elem)
    }

    /// True iff `index` is among the entries recorded for `elem`.
    pub(crate) fn holds(&self, elem: &T, index: usize) -> bool {
        self.lookup(elem).contains(&index)
    }

    /// Iterates over every element together with its recorded indices.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&T, &[usize])> {
        self.map.iter().map(|(elem, v)| (elem, v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_lookup() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 0, None);
        index.record(&9, 1, None);

        assert_eq!(index.lookup(&7), &[0]);
        assert_eq!(index.lookup(&9), &[1]);
        assert!(index.contains(&7));
        assert!(!index.contains(&8));
    }

    #[test]
    fn absent_element_yields_empty_slice() {
        let index: PositionIndex<i32> = PositionIndex::new();
        assert_eq!(index.lookup(&42), &[] as &[usize]);
        assert!(!index.holds(&42, 0));
    }

    #[test]
    fn record_with_prev_replaces_in_place() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 3, None);
        index.record(&7, 5, None);
        index.record(&7, 0, Some(3));

        assert_eq!(index.lookup(&7), &[0, 5]);
    }

    #[test]
    fn record_with_stale_prev_appends() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 3, None);
        index.record(&7, 5, Some(9));

        assert_eq!(index.lookup(&7), &[3, 5]);
    }

    #[test]
    fn duplicates_accumulate_entries() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 0, None);
        index.record(&7, 4, None);
        index.record(&7, 2, None);

        assert_eq!(index.lookup(&7), &[0, 4, 2]);
    }

    #[test]
    fn release_removes_one_occurrence() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 0, None);
        index.record(&7, 4, None);
        index.release(&7, 0);

        assert_eq!(index.lookup(&7), &[4]);
        assert!(index.contains(&7));

        index.release(&7, 4);
        assert!(!index.contains(&7));
    }

    #[test]
    fn release_of_unrecorded_index_is_noop() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 0, None);
        index.release(&7, 9);

        assert_eq!(index.lookup(&7), &[0]);
    }

    #[test]
    fn release_does_not_disturb_other_elements() {
        let mut index: PositionIndex<i32> = PositionIndex::new();

        index.record(&7, 0, None);
        index.record(&9, 1, None);
        index.release(&7, 0);

        assert_eq!(index.lookup(&9), &[1]);
    }
}
