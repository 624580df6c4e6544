//! D-way heap implementation
//!
//! A d-way heap (also d-ary heap or d-heap) is a priority queue that
//! generalizes the binary heap: every node has up to D children instead
//! of 2, so a binary heap is a 2-heap. The wider fan-out makes the tree
//! shallower, which cheapens `push` and `update_priority` at the price of
//! a wider sibling scan during `top`. For the priority queues inside
//! Dijkstra's and Prim's algorithms a 4-way heap is usually the best
//! trade-off in practice.
//!
//! Unlike the handle-based designs of pointer heaps, elements here are
//! addressed by value: an internal position index keyed by the element
//! itself tracks where each stored occurrence lives, so
//! [`DWayHeap::update_priority`] replaces every stored occurrence of the
//! old value at once without scanning the array.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity        |
//! |-------------------|-------------------|
//! | `push`            | O(log_D n)        |
//! | `peek`            | O(1)              |
//! | `top`             | O(D · log_D n)    |
//! | `update_priority` | O(k · D · log_D n)|
//! | `from_elements`   | O(n)              |
//!
//! where `k` is the number of stored occurrences of the updated value
//! (usually 1).
//!
//! # Example
//!
//! ```rust
//! use dway_heap::DWayHeap;
//!
//! let mut heap = DWayHeap::from_elements(2, vec![10, 20, 30]).unwrap();
//! heap.update_priority(&30, 1).unwrap();
//! assert_eq!(heap.peek().unwrap(), 1);
//! assert!(!heap.contains(&30));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::HeapError;
use crate::positions::PositionIndex;

/// Minimum admissible branching factor.
///
/// D = 1 would degenerate into a sorted array with O(n) insertion, so the
/// constructors reject it.
pub const MIN_BRANCH_FACTOR: usize = 2;

/// A d-way min-heap with positional priority updates.
///
/// The element type doubles as the priority: elements are ordered by the
/// heap's [`Comparator`] (by default [`NaturalOrder`], i.e. ascending
/// `Ord`), and are located for updates through their `Eq`/`Hash` identity.
/// Distinct logical entries that compare `Eq`-equal share one identity;
/// callers needing reference-like identity should key on a unique field or
/// wrap elements in a newtype.
///
/// `Clone` is required to support the copy-on-peek contract: [`peek`]
/// returns an independently owned copy of the root, so callers can never
/// mutate internal structure through it. [`peek_ref`] is available when a
/// borrow suffices.
///
/// [`peek`]: DWayHeap::peek
/// [`peek_ref`]: DWayHeap::peek_ref
///
/// # Example
///
/// ```rust
/// use dway_heap::DWayHeap;
///
/// let mut heap = DWayHeap::new(4).unwrap();
/// heap.push(10).push(20).push(5).push(15);
///
/// assert_eq!(heap.peek().unwrap(), 5);
/// assert_eq!(heap.len(), 4);
///
/// // Relax a queued entry, Dijkstra-style
/// heap.update_priority(&20, 1).unwrap();
/// assert_eq!(heap.top().unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct DWayHeap<T, C = NaturalOrder> {
    branch_factor: usize,
    elements: Vec<T>,
    positions: PositionIndex<T>,
    comparator: C,
}

impl<T: Clone + Eq + Hash + Ord> DWayHeap<T, NaturalOrder> {
    /// Creates an empty heap with the given branching factor and the
    /// natural ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidBranchFactor`] when `branch_factor < 2`.
    pub fn new(branch_factor: usize) -> Result<Self, HeapError> {
        Self::with_comparator(branch_factor, NaturalOrder)
    }

    /// Builds a heap holding `elements`, in O(n).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidBranchFactor`] when `branch_factor < 2`.
    pub fn from_elements(branch_factor: usize, elements: Vec<T>) -> Result<Self, HeapError> {
        Self::from_elements_with(branch_factor, elements, NaturalOrder)
    }
}

impl<T: Clone + Eq + Hash, C: Comparator<T>> DWayHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidBranchFactor`] when `branch_factor < 2`.
    pub fn with_comparator(branch_factor: usize, comparator: C) -> Result<Self, HeapError> {
        if branch_factor < MIN_BRANCH_FACTOR {
            return Err(HeapError::InvalidBranchFactor(branch_factor));
        }
        Ok(Self {
            branch_factor,
            elements: Vec::new(),
            positions: PositionIndex::new(),
            comparator,
        })
    }

    /// Builds a heap holding `elements`, ordered by `comparator`, in O(n).
    ///
    /// Uses bottom-up construction: every element is recorded at its
    /// natural index in one pass, then the inner nodes are pushed down from
    /// the last one to the root.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidBranchFactor`] when `branch_factor < 2`.
    pub fn from_elements_with(
        branch_factor: usize,
        elements: Vec<T>,
        comparator: C,
    ) -> Result<Self, HeapError> {
        let mut heap = Self::with_comparator(branch_factor, comparator)?;
        heap.heapify(elements);
        Ok(heap)
    }

    /// Returns the number of elements stored in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the configured branching factor D.
    pub fn branch_factor(&self) -> usize {
        self.branch_factor
    }

    /// Returns true iff at least one occurrence of `elem` is stored.
    pub fn contains(&self, elem: &T) -> bool {
        self.positions.contains(elem)
    }

    /// Returns the storage indices at which `elem` currently resides, in
    /// recording order (not necessarily sorted). Empty when absent, which
    /// keeps "absent" distinguishable from "present at index 0".
    ///
    /// Diagnostic view; the indices are internal and change across
    /// mutations.
    pub fn positions_of(&self, elem: &T) -> &[usize] {
        self.positions.lookup(elem)
    }

    /// Returns an independently owned copy of the highest-priority element.
    ///
    /// The clone keeps callers from reaching internal structure; see
    /// [`peek_ref`](DWayHeap::peek_ref) for a borrowing variant.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] when the heap is empty.
    pub fn peek(&self) -> Result<T, HeapError> {
        self.elements.first().cloned().ok_or(HeapError::EmptyHeap)
    }

    /// Returns a reference to the highest-priority element, or `None` when
    /// the heap is empty.
    pub fn peek_ref(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Adds an element to the heap, reinstating the heap property.
    ///
    /// Returns the heap itself for chaining:
    ///
    /// ```rust
    /// use dway_heap::DWayHeap;
    ///
    /// let mut heap = DWayHeap::new(3).unwrap();
    /// heap.push(2).push(1).push(3);
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn push(&mut self, elem: T) -> &mut Self {
        let index = self.elements.len();
        self.positions.record(&elem, index, None);
        self.elements.push(elem);
        self.bubble_up(index);
        self
    }

    /// Removes and returns the highest-priority element.
    ///
    /// The last element moves into the vacated root slot and is pushed
    /// down to its resting place.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] when the heap is empty.
    pub fn top(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let last = self.elements.len() - 1;
        let top = self.elements.swap_remove(0);
        self.positions.release(&top, 0);

        if last != 0 {
            // the former last element now occupies the root slot
            self.positions.record(&self.elements[0], 0, Some(last));
            self.push_down(0);
        }

        Ok(top)
    }

    /// Replaces every stored occurrence of `old_value` with `new_value`,
    /// reinstating the heap property.
    ///
    /// When the new value has higher priority the affected slots bubble up
    /// (in ascending index order); when lower, they are pushed down (in
    /// descending index order); when the comparator reports a tie no
    /// structural work happens.
    ///
    /// **WARNING**: all occurrences are replaced. A caller that wants to
    /// update a single duplicate must not rely on this operation.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::ElementNotFound`] when `old_value` has no
    /// stored occurrence.
    pub fn update_priority(&mut self, old_value: &T, new_value: T) -> Result<&mut Self, HeapError> {
        let recorded = self.positions.lookup(old_value);
        if recorded.is_empty() {
            return Err(HeapError::ElementNotFound);
        }
        let mut affected = recorded.to_vec();
        let order = self.comparator.compare(&new_value, old_value);

        for &i in &affected {
            self.positions.release(&self.elements[i], i);
            self.positions.record(&new_value, i, None);
            self.elements[i] = new_value.clone();
        }

        match order {
            Ordering::Less => {
                affected.sort_unstable();
                for &i in &affected {
                    // re-resolve: an earlier restructuring may have moved
                    // this slot's occupant
                    if self.positions.holds(&new_value, i) {
                        self.bubble_up(i);
                    }
                }
            }
            Ordering::Greater => {
                affected.sort_unstable_by(|a, b| b.cmp(a));
                for &i in &affected {
                    if self.positions.holds(&new_value, i) {
                        self.push_down(i);
                    }
                }
            }
            Ordering::Equal => {}
        }

        Ok(self)
    }

    /// Drains the heap, returning every element in ascending comparator
    /// order.
    ///
    /// **WARNING**: all elements are removed from the heap.
    pub fn sorted(&mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len());
        while let Ok(elem) = self.top() {
            result.push(elem);
        }
        result
    }

    /// Verifies the heap property and the position bookkeeping at every
    /// index.
    ///
    /// Diagnostic hook for test suites; it is never called from the
    /// operational paths, and a failure is only reachable through an
    /// internal defect.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvariantViolation`] naming the offending
    /// index.
    pub fn check_invariant(&self) -> Result<(), HeapError> {
        let n = self.elements.len();

        for parent in 0..n {
            let first_child = parent * self.branch_factor + 1;
            let last_child = (first_child + self.branch_factor).min(n);
            for child in first_child..last_child {
                if self
                    .comparator
                    .compare(&self.elements[child], &self.elements[parent])
                    == Ordering::Less
                {
                    return Err(HeapError::InvariantViolation { index: child });
                }
            }
        }

        // every slot must be recorded for its occupant...
        for (index, elem) in self.elements.iter().enumerate() {
            if !self.positions.holds(elem, index) {
                return Err(HeapError::InvariantViolation { index });
            }
        }

        // ...and every recorded index must point back at its element,
        // exactly once
        for (elem, indices) in self.positions.entries() {
            for (slot, &index) in indices.iter().enumerate() {
                if index >= n || self.elements[index] != *elem {
                    return Err(HeapError::InvariantViolation { index });
                }
                if indices[..slot].contains(&index) {
                    return Err(HeapError::InvariantViolation { index });
                }
            }
        }

        Ok(())
    }

    /// Index of the parent of `index`; callers guarantee `index > 0`.
    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.branch_factor
    }

    /// Moves the element at `index` toward the root until its parent no
    /// longer compares greater, sliding displaced parents down into the
    /// vacated slot. Returns the element's resting index.
    fn bubble_up(&mut self, index: usize) -> usize {
        let mut hole = index;
        while hole > 0 {
            let parent = self.parent(hole);
            if self
                .comparator
                .compare(&self.elements[hole], &self.elements[parent])
                != Ordering::Less
            {
                break;
            }
            self.positions.record(&self.elements[parent], hole, Some(parent));
            self.elements.swap(hole, parent);
            hole = parent;
        }
        if hole != index {
            self.positions.record(&self.elements[hole], hole, Some(index));
        }
        hole
    }

    /// Moves the element at `index` toward the leaves: while the leftmost
    /// strictly-smallest child compares smaller, it slides up and the
    /// element descends. Returns the element's resting index.
    fn push_down(&mut self, index: usize) -> usize {
        let n = self.elements.len();
        let mut hole = index;
        loop {
            let first_child = hole * self.branch_factor + 1;
            if first_child >= n {
                break;
            }
            let last_child = (first_child + self.branch_factor).min(n);

            let mut smallest = first_child;
            for child in first_child + 1..last_child {
                if self
                    .comparator
                    .compare(&self.elements[child], &self.elements[smallest])
                    == Ordering::Less
                {
                    smallest = child;
                }
            }

            if self
                .comparator
                .compare(&self.elements[smallest], &self.elements[hole])
                != Ordering::Less
            {
                break;
            }
            self.positions.record(&self.elements[smallest], hole, Some(smallest));
            self.elements.swap(hole, smallest);
            hole = smallest;
        }
        if hole != index {
            self.positions.record(&self.elements[hole], hole, Some(index));
        }
        hole
    }

    /// Seeds storage and position index from `initial` in one pass, then
    /// pushes down every inner node from the last one to the root. O(n).
    fn heapify(&mut self, initial: Vec<T>) {
        self.positions.reserve(initial.len());
        for (index, elem) in initial.iter().enumerate() {
            self.positions.record(elem, index, None);
        }
        self.elements = initial;

        if self.elements.is_empty() {
            return;
        }
        let last_inner = (self.elements.len() - 1) / self.branch_factor;
        for i in (0..=last_inner).rev() {
            self.push_down(i);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DWayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DWayHeap")
            .field("branch_factor", &self.branch_factor)
            .field("elements", &self.elements)
            .finish()
    }
}
