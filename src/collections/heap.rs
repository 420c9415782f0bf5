//! Priority heap facade.
//!
//! The ordering predicate is mandatory: pass any [`Comparator`], including a
//! closure `|a: &T, b: &T| -> bool` that returns `true` when `a` must pop
//! before `b`. [`Heap::min`] and [`Heap::max`] cover `T: Ord`.
//!
//! ```
//! use containerkit::collections::Heap;
//!
//! let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
//! for v in [5, 3, 8, 1, 6] {
//!     heap.push(v);
//! }
//! let order: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
//! assert_eq!(order, vec![1, 3, 5, 6, 8]);
//! ```

use std::fmt;

use crate::ds::{Comparator, ComparatorHeap, MaxFirst, MinFirst};
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;
use crate::traits::{Container, Snapshot};

/// Priority heap ordered by the comparator `C`.
///
/// `C` decides which of two elements pops first; see [`Comparator`]. The
/// heap never inspects `T` beyond calling the comparator, so any element
/// type works.
///
/// # Example
///
/// ```
/// use containerkit::collections::Heap;
///
/// // Longest string first.
/// let mut heap = Heap::new(|a: &String, b: &String| a.len() > b.len());
/// heap.push("ab".to_string());
/// heap.push("abcd".to_string());
/// heap.push("a".to_string());
/// assert_eq!(heap.pop().as_deref(), Some("abcd"));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone)]
pub struct Heap<T, C> {
    inner: ComparatorHeap<T, C>,
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("inner", &self.inner).finish()
    }
}

impl<T: Ord> Heap<T, MinFirst> {
    /// Heap popping the smallest element first.
    pub fn min() -> Self {
        Self::new(MinFirst)
    }
}

impl<T: Ord> Heap<T, MaxFirst> {
    /// Heap popping the largest element first.
    pub fn max() -> Self {
        Self::new(MaxFirst)
    }
}

impl<T, C> Heap<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty heap ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            inner: ComparatorHeap::new(cmp),
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            inner: ComparatorHeap::with_capacity(capacity, cmp),
        }
    }

    /// Heapifies `items` in O(n).
    pub fn from_vec(items: Vec<T>, cmp: C) -> Self {
        Self {
            inner: ComparatorHeap::from_vec(items, cmp),
        }
    }

    /// Inserts `value` and sifts it up. O(log n).
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Removes and returns the highest-priority element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Borrows the element the next [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drops every element. This is the heap's `reset`.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Heap (array) order, not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Drains the heap in pop order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.inner.into_sorted_vec()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.inner.metrics_snapshot()
    }

    /// Zeroes the operation counters; contents and capacity are untouched.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.inner.reset_metrics();
    }
}

impl<T: Clone, C> Heap<T, C> {
    /// Copy of the backing array in heap order.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.to_vec()
    }
}

impl<T, C> Default for Heap<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C> Extend<T> for Heap<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C> FromIterator<T> for Heap<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), C::default())
    }
}

impl<T, C> Container for Heap<T, C>
where
    C: Comparator<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn reset(&mut self) {
        self.inner.clear();
    }
}

impl<T: Clone, C> Snapshot<T> for Heap<T, C> {
    fn snapshot(&self) -> Vec<T> {
        self.inner.to_vec()
    }
}

#[cfg(feature = "metrics")]
impl<T, C> MetricsSnapshotProvider<BufferMetricsSnapshot> for Heap<T, C>
where
    C: Comparator<T>,
{
    fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.inner.metrics_snapshot()
    }
}
