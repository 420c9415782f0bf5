//! Array-backed binary heap ordered by a caller-supplied [`Comparator`].
//!
//! The tree is embedded in array order: index `i` has children `2i + 1`
//! and `2i + 2`. The root is the element that must pop first.
//!
//! ## Architecture
//!
//! ```text
//!   comparator = |a, b| a < b   (min first)
//!
//!   items: [1, 3, 8, 5, 6]
//!
//!                 1            index 0
//!               /   \
//!              3     8         index 1, 2
//!             / \
//!            5   6             index 3, 4
//!
//!   invariant: for every i > 0,
//!              !comparator(items[i], items[(i - 1) / 2])
//! ```
//!
//! ## Operations
//!
//! | Operation         | Description                              | Complexity |
//! |-------------------|------------------------------------------|------------|
//! | `push`            | Append, sift up                          | O(log n)   |
//! | `pop`             | Swap root with last, shrink, sift down   | O(log n)   |
//! | `peek`            | Borrow the root                          | O(1)       |
//! | `from_vec`        | Bottom-up heapify                        | O(n)       |
//! | `into_sorted_vec` | Drain in pop order                       | O(n log n) |
//!
//! ## Comparator Contract
//!
//! `higher_priority(a, b)` returns `true` iff `a` must pop before `b`. It
//! must be irreflexive and transitive. The heap does not check this; an
//! inconsistent comparator yields an unspecified pop order, never a panic.
//!
//! ## Example Usage
//!
//! ```
//! use containerkit::ds::ComparatorHeap;
//!
//! let mut heap = ComparatorHeap::new(|a: &u32, b: &u32| a > b);
//! heap.push(5);
//! heap.push(9);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Some(&9));
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.into_sorted_vec(), vec![5, 1]);
//! ```

use std::fmt;

use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BufferMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{BufferMetricsReadRecorder, BufferMetricsRecorder};

/// Ordering strategy for [`ComparatorHeap`].
///
/// Implemented for every `Fn(&T, &T) -> bool`, and by [`MinFirst`] /
/// [`MaxFirst`] for `T: Ord`.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` iff `a` must pop before `b`.
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element pops first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Comparator<T> for MinFirst {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element pops first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Comparator<T> for MaxFirst {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Binary heap whose order comes from an injected [`Comparator`].
pub struct ComparatorHeap<T, C> {
    items: Vec<T>,
    cmp: C,
    #[cfg(feature = "metrics")]
    metrics: BufferMetrics,
}

impl<T, C> ComparatorHeap<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty heap ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self::with_capacity(0, cmp)
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }

    /// Builds a heap from arbitrary `items` in O(n).
    pub fn from_vec(items: Vec<T>, cmp: C) -> Self {
        let mut heap = Self {
            items,
            cmp,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        };
        for idx in (0..heap.items.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the ordering strategy.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts `value` and restores heap order.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        let last = self.items.len() - 1;
        self.sift_up(last);
        #[cfg(feature = "metrics")]
        self.metrics.record_push();
    }

    /// Removes and returns the highest-priority element.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return None;
        }
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_found();
        Some(root)
    }

    /// Borrows the highest-priority element.
    pub fn peek(&self) -> Option<&T> {
        let found = self.items.first();
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_peek_call();
            if found.is_some() {
                self.metrics.record_peek_found();
            }
        }
        found
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Elements in heap (array) order, not sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Borrowed iterator in heap (array) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the heap, returning elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that no child outranks its parent.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for idx in 1..self.items.len() {
            let parent = (idx - 1) / 2;
            if self.cmp.higher_priority(&self.items[idx], &self.items[parent]) {
                return Err(InvariantError::new(
                    "comparator heap",
                    format!(
                        "element at {} outranks its parent at {}",
                        idx, parent
                    ),
                ));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("invariant violated: {}", e);
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.cmp.higher_priority(&self.items[idx], &self.items[parent]) {
                break;
            }
            self.items.swap(idx, parent);
            #[cfg(feature = "metrics")]
            self.metrics.record_sift_step();
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;
            if left < len && self.cmp.higher_priority(&self.items[left], &self.items[best]) {
                best = left;
            }
            if right < len && self.cmp.higher_priority(&self.items[right], &self.items[best]) {
                best = right;
            }
            if best == idx {
                return;
            }
            self.items.swap(idx, best);
            #[cfg(feature = "metrics")]
            self.metrics.record_sift_step();
            idx = best;
        }
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.metrics.snapshot(self.items.len(), self.items.capacity())
    }

    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl<T: Clone, C> ComparatorHeap<T, C> {
    /// Independent copy of the backing array in heap order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone, C: Clone> Clone for ComparatorHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            cmp: self.cmp.clone(),
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ComparatorHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorHeap")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i16),
        Pop,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => any::<i16>().prop_map(Op::Push),
            2 => Just(Op::Pop),
        ]
    }

    proptest! {
        /// Property: interleaved push/pop keeps the heap invariant, and
        /// draining yields a non-decreasing sequence
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_drain_is_ordered(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut heap = ComparatorHeap::new(|a: &i16, b: &i16| a < b);
            let mut model = std::collections::BinaryHeap::new();

            for op in ops {
                match op {
                    Op::Push(v) => {
                        heap.push(v);
                        model.push(std::cmp::Reverse(v));
                    }
                    Op::Pop => {
                        prop_assert_eq!(heap.pop(), model.pop().map(|r| r.0));
                    }
                }
                prop_assert!(heap.check_invariants().is_ok());
                prop_assert_eq!(heap.len(), model.len());
            }

            let drained = heap.into_sorted_vec();
            for pair in drained.windows(2) {
                prop_assert!(!(pair[1] < pair[0]));
            }
        }

        /// Property: re-pushing a snapshot reproduces the pop sequence
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_snapshot_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
            let mut heap = ComparatorHeap::new(MaxFirst);
            for v in values {
                heap.push(v);
            }
            let mut rebuilt = ComparatorHeap::new(MaxFirst);
            for v in heap.to_vec() {
                rebuilt.push(v);
            }
            prop_assert_eq!(rebuilt.into_sorted_vec(), heap.into_sorted_vec());
        }
    }
}
