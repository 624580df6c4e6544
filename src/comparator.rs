//! Comparator seam for heap ordering
//!
//! The heap is a min-heap with respect to a pluggable [`Comparator`]:
//! elements that compare smaller have higher priority and rise toward the
//! root. [`NaturalOrder`] is the default and compares through [`Ord`];
//! [`FnComparator`] adapts an ordering closure for custom priorities
//! (reversed order for max-heap behavior, field projections, and so on).
//!
//! Comparators must be pure and induce a consistent total order. A
//! comparator that mutates shared state or answers inconsistently cannot
//! cause memory unsafety, but the heap order it produces is unspecified.

use std::cmp::Ordering;

/// A total order over heap elements.
///
/// The heap treats `Ordering::Less` as "higher priority". Implementations
/// must not mutate the compared elements.
pub trait Comparator<T> {
    /// Compares `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The default comparator: ascending natural order through [`Ord`].
///
/// # Example
///
/// ```rust
/// use dway_heap::DWayHeap;
///
/// // `new` uses NaturalOrder, so the smallest value surfaces first
/// let mut heap = DWayHeap::new(2).unwrap();
/// heap.push(3).push(1).push(2);
/// assert_eq!(heap.top().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts any `Fn(&T, &T) -> Ordering` closure into a [`Comparator`].
///
/// # Example
///
/// ```rust
/// use dway_heap::{DWayHeap, FnComparator};
///
/// // Reverse the order to get a max-heap
/// let mut heap =
///     DWayHeap::with_comparator(2, FnComparator(|a: &i32, b: &i32| b.cmp(a))).unwrap();
/// heap.push(3).push(7).push(5);
/// assert_eq!(heap.top().unwrap(), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn fn_comparator_delegates_to_closure() {
        let reversed = FnComparator(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.compare(&2, &1), Ordering::Less);
    }

    #[test]
    fn fn_comparator_on_projected_field() {
        let by_len = FnComparator(|a: &String, b: &String| a.len().cmp(&b.len()));
        assert_eq!(
            by_len.compare(&"ab".to_string(), &"abcd".to_string()),
            Ordering::Less
        );
        assert_eq!(
            by_len.compare(&"abcd".to_string(), &"ab".to_string()),
            Ordering::Greater
        );
    }
}
