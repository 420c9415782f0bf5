//! Single-ended FIFO queue.
//!
//! Shares the [`RingBuffer`] engine with [`Deque`](super::Deque) but starts
//! from two slots and only exposes the back-push/front-pop pair.
//!
//! ```
//! use containerkit::collections::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push("a");
//! queue.push("b");
//! assert_eq!(queue.peek(), Some(&"a"));
//! assert_eq!(queue.pop(), Some("a"));
//! assert_eq!(queue.pop(), Some("b"));
//! assert_eq!(queue.pop(), None);
//! ```

use crate::ds::RingBuffer;
use crate::ds::ring_buffer::Iter;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;
use crate::policy::ShrinkPolicy;
use crate::traits::{Container, Shrinkable, Snapshot};

/// Slots allocated by a freshly constructed queue.
pub const QUEUE_INITIAL_CAPACITY: usize = 2;

/// FIFO queue over a [`RingBuffer`].
///
/// Elements are pushed at the back and popped from the front. The ring
/// starts with [`QUEUE_INITIAL_CAPACITY`] slots, doubles when full, and is
/// compacted under its [`ShrinkPolicy`] after pops.
///
/// # Example
///
/// ```
/// use containerkit::collections::Queue;
///
/// let mut queue: Queue<_> = (1..=3).collect();
/// assert_eq!(queue.pop(), Some(1));
/// queue.push(4);
/// assert_eq!(queue.snapshot(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    ring: RingBuffer<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue with the default [`ShrinkPolicy`].
    pub fn new() -> Self {
        Self::with_policy(ShrinkPolicy::default())
    }

    /// Creates an empty queue that shrinks according to `policy`.
    pub fn with_policy(policy: ShrinkPolicy) -> Self {
        Self {
            ring: RingBuffer::with_policy(QUEUE_INITIAL_CAPACITY, policy),
        }
    }

    /// Appends `value` at the back, growing the ring if it is full.
    pub fn push(&mut self, value: T) {
        self.ring.push_back(value);
    }

    /// Removes and returns the oldest element, or `None` if empty.
    ///
    /// May rebuild the ring to exactly `len` slots when the policy says the
    /// store has become sparse.
    pub fn pop(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    /// Borrows the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.ring.front()
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn policy(&self) -> &ShrinkPolicy {
        self.ring.policy()
    }

    /// Drops every element; see [`RingBuffer::reset`].
    pub fn reset(&mut self) {
        self.ring.reset();
    }

    /// Oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.ring.metrics_snapshot()
    }

    /// Zeroes the operation counters; contents and capacity are untouched.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.ring.reset_metrics();
    }
}

impl<T: Clone> Queue<T> {
    /// Oldest-to-newest copy of the contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.ring.to_vec()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Container for Queue<T> {
    fn len(&self) -> usize {
        self.ring.len()
    }

    fn reset(&mut self) {
        self.ring.reset();
    }
}

impl<T> Shrinkable for Queue<T> {
    fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    fn policy(&self) -> &ShrinkPolicy {
        self.ring.policy()
    }
}

impl<T: Clone> Snapshot<T> for Queue<T> {
    fn snapshot(&self) -> Vec<T> {
        self.ring.to_vec()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BufferMetricsSnapshot> for Queue<T> {
    fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.ring.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
        assert_eq!(q.peek(), None);
        q.push(10);
        assert_eq!(q.peek(), Some(&10));
        q.push(20);
        q.push(30);
        assert_eq!(q.pop(), Some(10));
        assert_eq!(q.pop(), Some(20));
        assert_eq!(q.pop(), Some(30));
        assert!(q.is_empty());
    }

    #[test]
    fn resize_and_wrap_around() {
        let mut q = Queue::new();
        q.extend(1..=10);
        assert_eq!(q.len(), 10);
        for expected in 1..=5 {
            assert_eq!(q.pop(), Some(expected));
        }
        q.extend(11..=15);
        let drained: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(drained, (6..=15).collect::<Vec<_>>());
    }

    #[test]
    fn capacity_grows_then_reset_accepts_new_items() {
        let mut q = Queue::new();
        let initial = q.capacity();
        assert_eq!(initial, QUEUE_INITIAL_CAPACITY);
        q.extend(0..10);
        assert!(q.capacity() > initial);
        q.reset();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        q.push(42);
        assert_eq!(q.peek(), Some(&42));
    }

    #[test]
    fn two_slot_queue_fills_before_growing() {
        let mut q = Queue::new();
        q.push(1);
        q.push(2);
        assert_eq!(q.capacity(), 2);
        q.push(3);
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn holds_values_equal_to_default() {
        let mut q = Queue::new();
        q.push(String::new());
        assert_eq!(q.peek(), Some(&String::new()));
        assert_eq!(q.pop(), Some(String::new()));
        assert_eq!(q.pop(), None);
    }
}
