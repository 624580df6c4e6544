//! D-Way Heap Priority Queue for Rust
//!
//! This crate provides a d-way (d-ary) min-heap priority queue with a
//! configurable branching factor and efficient in-place priority updates,
//! the primitive that shortest-path and minimum-spanning-tree algorithms
//! (Dijkstra, Prim) lean on when relaxing distances of already-queued
//! nodes.
//!
//! # Features
//!
//! - **Configurable fan-out**: any branching factor D ≥ 2; a binary heap is
//!   just the D = 2 case, and D = 4 is usually the practical sweet spot
//!   for relaxation workloads
//! - **Positional priority updates**: an internal position index maps each
//!   element to the slots it occupies, so `update_priority` runs in
//!   O(log_D n) instead of scanning the array
//! - **Duplicate support**: equal elements may be stored many times; the
//!   index keeps one entry per occurrence
//! - **Pluggable ordering**: a [`Comparator`] seam with an ascending
//!   [`NaturalOrder`] default and an [`FnComparator`] closure adapter
//! - **O(n) bulk construction** via bottom-up heapify
//! - **Invariant verification hook** for test suites, kept off the hot
//!   paths
//!
//! # Example
//!
//! ```rust
//! use dway_heap::DWayHeap;
//!
//! let mut heap = DWayHeap::new(4).unwrap();
//! heap.push(10).push(20).push(5).push(15);
//! assert_eq!(heap.peek().unwrap(), 5);
//!
//! // Relax an entry already in the queue
//! heap.update_priority(&20, 1).unwrap();
//! assert_eq!(heap.top().unwrap(), 1);
//!
//! // Drain the rest in ascending order
//! assert_eq!(heap.sorted(), vec![5, 10, 15]);
//! ```

pub mod comparator;
pub mod dway;
pub mod error;
mod positions;

// Re-export the main types for convenience
pub use comparator::{Comparator, FnComparator, NaturalOrder};
pub use dway::{DWayHeap, MIN_BRANCH_FACTOR};
pub use error::HeapError;
