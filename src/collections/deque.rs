//! Double-ended queue.
//!
//! ## Example Usage
//!
//! ```
//! use containerkit::collections::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.peek_front(), Some(&0));
//! assert_eq!(deque.peek_back(), Some(&2));
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.pop_back(), Some(2));
//! assert_eq!(deque.pop_front(), Some(1));
//! assert!(deque.is_empty());
//! ```

use crate::ds::RingBuffer;
use crate::ds::ring_buffer::Iter;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;
use crate::policy::ShrinkPolicy;
use crate::traits::{Container, Shrinkable, Snapshot};

/// Slots allocated by a freshly constructed deque.
pub const DEQUE_INITIAL_CAPACITY: usize = 4;

/// Ring-buffer deque with amortized O(1) push/pop at both ends.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    ring: RingBuffer<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque with the default [`ShrinkPolicy`].
    pub fn new() -> Self {
        Self::with_policy(ShrinkPolicy::default())
    }

    /// Creates an empty deque that shrinks according to `policy`.
    ///
    /// # Example
    ///
    /// ```
    /// use containerkit::collections::Deque;
    /// use containerkit::policy::ShrinkPolicy;
    ///
    /// let mut deque = Deque::with_policy(ShrinkPolicy::new(8, 0.5, true));
    /// deque.extend(0..32);
    /// while deque.len() > 3 {
    ///     deque.pop_front();
    /// }
    /// assert!(deque.capacity() < 32);
    /// ```
    pub fn with_policy(policy: ShrinkPolicy) -> Self {
        Self {
            ring: RingBuffer::with_policy(DEQUE_INITIAL_CAPACITY, policy),
        }
    }

    /// Inserts `value` before the front, growing the ring if it is full.
    pub fn push_front(&mut self, value: T) {
        self.ring.push_front(value);
    }

    /// Inserts `value` after the back, growing the ring if it is full.
    pub fn push_back(&mut self, value: T) {
        self.ring.push_back(value);
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.ring.front()
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.ring.back()
    }

    /// Element at logical position `index`, counting from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.ring.get(index)
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the number of slots in the ring (always `>= len()`).
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn policy(&self) -> &ShrinkPolicy {
        self.ring.policy()
    }

    /// Drops all elements; see [`RingBuffer::reset`].
    pub fn reset(&mut self) {
        self.ring.reset();
    }

    /// Compacts the backing store to exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        self.ring.shrink_to_fit();
    }

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

impl<T: Clone> Deque<T> {
    /// Front-to-back copy of the contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.ring.to_vec()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Container for Deque<T> {
    fn len(&self) -> usize {
        self.ring.len()
    }

    fn reset(&mut self) {
        self.ring.reset();
    }
}

impl<T> Shrinkable for Deque<T> {
    fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    fn policy(&self) -> &ShrinkPolicy {
        self.ring.policy()
    }
}

impl<T: Clone> Snapshot<T> for Deque<T> {
    fn snapshot(&self) -> Vec<T> {
        self.ring.to_vec()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BufferMetricsSnapshot> for Deque<T> {
    fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.ring.metrics_snapshot()
    }
}
