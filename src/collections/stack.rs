//! LIFO stack with manual and automatic compaction.
//!
//! ```
//! use containerkit::collections::Stack;
//! use containerkit::policy::ShrinkPolicy;
//!
//! let mut stack = Stack::with_policy(ShrinkPolicy::disabled());
//! stack.extend(0..100);
//! while stack.len() > 10 {
//!     stack.pop();
//! }
//! assert_eq!(stack.capacity(), 128);
//!
//! stack.shrink_now();
//! assert_eq!(stack.capacity(), 10);
//! assert_eq!(stack.peek(), Some(&9));
//! ```

use crate::ds::LinearBuffer;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;
use crate::policy::ShrinkPolicy;
use crate::traits::{Container, Shrinkable, Snapshot};

/// LIFO stack over a [`LinearBuffer`].
///
/// The backing store doubles when full and, under the configured
/// [`ShrinkPolicy`], is compacted to exactly `len` slots after a pop leaves
/// it sparse. [`shrink_now`](Self::shrink_now) compacts on demand even when
/// auto-shrink is disabled.
///
/// # Example
///
/// ```
/// use containerkit::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
/// assert_eq!(stack.peek(), Some(&"b"));
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    buf: LinearBuffer<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the default [`ShrinkPolicy`].
    ///
    /// No storage is allocated until the first push.
    pub fn new() -> Self {
        Self::with_policy(ShrinkPolicy::default())
    }

    /// Creates an empty stack that shrinks according to `policy`.
    ///
    /// # Example
    ///
    /// ```
    /// use containerkit::collections::Stack;
    /// use containerkit::policy::ShrinkPolicy;
    ///
    /// let stack: Stack<u8> = Stack::with_policy(ShrinkPolicy::disabled());
    /// assert!(!stack.policy().auto_shrink());
    /// ```
    pub fn with_policy(policy: ShrinkPolicy) -> Self {
        Self {
            buf: LinearBuffer::with_policy(policy),
        }
    }

    /// Pushes `value` on top. Amortized O(1); never fails.
    pub fn push(&mut self, value: T) {
        self.buf.push(value);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    ///
    /// The vacated slot is cleared before the shrink policy is consulted, so
    /// owned values are dropped as soon as they are popped.
    ///
    /// # Example
    ///
    /// ```
    /// use containerkit::collections::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(0);
    /// assert_eq!(stack.pop(), Some(0));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Borrows the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.buf.peek()
    }

    /// Compacts to exactly `len` slots, whatever the policy says.
    pub fn shrink_now(&mut self) {
        self.buf.shrink_now();
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of slots in the backing store.
    ///
    /// Always `>= len()`; `0` before the first push and after a reset with
    /// auto-shrink enabled.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn policy(&self) -> &ShrinkPolicy {
        self.buf.policy()
    }

    /// Drops every element.
    ///
    /// With auto-shrink enabled the backing store is released too; otherwise
    /// capacity is kept for reuse. Calling it twice is the same as once.
    pub fn reset(&mut self) {
        self.buf.reset();
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.buf.iter()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.buf.metrics_snapshot()
    }

    /// Zeroes the operation counters; contents and capacity are untouched.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.buf.reset_metrics();
    }
}

impl<T: Clone> Stack<T> {
    /// Bottom-to-top copy; pushing it in order into a new stack recreates
    /// this one.
    pub fn snapshot(&self) -> Vec<T> {
        self.buf.to_vec()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Container for Stack<T> {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn reset(&mut self) {
        self.buf.reset();
    }
}

impl<T> Shrinkable for Stack<T> {
    fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    fn policy(&self) -> &ShrinkPolicy {
        self.buf.policy()
    }
}

impl<T: Clone> Snapshot<T> for Stack<T> {
    fn snapshot(&self) -> Vec<T> {
        self.buf.to_vec()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BufferMetricsSnapshot> for Stack<T> {
    fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.buf.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_push_pop() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
    }

    #[test]
    fn peek_and_underflow() {
        let mut s = Stack::new();
        s.push(42);
        assert_eq!(s.peek(), Some(&42));
        assert_eq!(s.pop(), Some(42));
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
    }

    #[test]
    fn interleaved_operations() {
        let mut s = Stack::new();
        s.push(5);
        assert_eq!(s.pop(), Some(5));
        s.push(6);
        s.push(7);
        assert_eq!(s.peek(), Some(&7));
        assert_eq!(s.pop(), Some(7));
        assert_eq!(s.pop(), Some(6));
    }

    #[test]
    fn snapshot_round_trip_reproduces_pops() {
        let mut s: Stack<_> = (0..7).collect();
        s.pop();
        let rebuilt: Stack<_> = s.snapshot().into_iter().collect();
        assert_eq!(rebuilt.snapshot(), s.snapshot());
        assert_eq!(rebuilt.peek(), s.peek());
    }

    #[test]
    fn shrink_now_on_empty_releases_everything() {
        let mut s = Stack::with_policy(ShrinkPolicy::disabled());
        s.extend(0..5);
        while s.pop().is_some() {}
        s.shrink_now();
        assert_eq!(s.capacity(), 0);
        s.push(1);
        assert_eq!(s.peek(), Some(&1));
    }
}
