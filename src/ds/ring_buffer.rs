//! Growable, shrinkable ring buffer backing [`Deque`] and [`Queue`].
//!
//! A contiguous slot array treated as circular via modular indexing. Pushes
//! and pops at either end are O(1) amortized; the backing store doubles when
//! full and is rebuilt to exactly `len` slots when the [`ShrinkPolicy`]
//! says so.
//!
//! [`Deque`]: crate::collections::Deque
//! [`Queue`]: crate::collections::Queue
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          RingBuffer<T>                               │
//!   │                                                                      │
//!   │   slots: Vec<Option<T>>   capacity = slots.len()                     │
//!   │   head ──────────┐        tail = (head + len) % capacity             │
//!   │                  ▼                                                   │
//!   │   index:   0     1     2     3     4     5     6     7               │
//!   │          ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐          │
//!   │   slots: │  B  │  C  │  D  │  E  │     │     │     │  A  │          │
//!   │          └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘          │
//!   │                                                                      │
//!   │   head = 7, len = 5  →  logical order: A B C D E                     │
//!   │   logical[i] = slots[(head + i) % capacity]                          │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resize Flow
//!
//! ```text
//!   push_*(v) with len == capacity
//!        │
//!        ▼
//!   rebuild(max(4, capacity * 2)): copy logical order to slots[0..len],
//!   head = 0
//!
//!   pop_*() → len -= 1
//!        │
//!        ▼
//!   policy.should_shrink(len, capacity)?  YES → rebuild(len), head = 0
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation              | Time        | Notes                             |
//! |------------------------|-------------|-----------------------------------|
//! | `push_front/back`      | O(1) amort. | Doubling growth                   |
//! | `pop_front/back`       | O(1) amort. | Shrink rebuild is O(len)          |
//! | `front` / `back`       | O(1)        | Borrowed peek                     |
//! | `get`                  | O(1)        | Logical index                     |
//! | `to_vec`               | O(len)      | Independent snapshot              |
//!
//! ## Notes
//! - Vacated slots are set to `None` immediately so owned values drop on pop.
//! - `check_invariants()` reports structural violations as [`InvariantError`].

use std::fmt;

use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BufferMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{BufferMetricsReadRecorder, BufferMetricsRecorder};
use crate::policy::{ShrinkPolicy, grown_capacity};

/// Circular buffer with doubling growth and policy-driven shrinking.
///
/// # Example
///
/// ```
/// use containerkit::ds::RingBuffer;
/// use containerkit::policy::ShrinkPolicy;
///
/// let mut ring = RingBuffer::with_policy(4, ShrinkPolicy::default());
/// ring.push_back(1);
/// ring.push_back(2);
/// ring.push_front(0);
///
/// assert_eq!(ring.front(), Some(&0));
/// assert_eq!(ring.back(), Some(&2));
/// assert_eq!(ring.to_vec(), vec![0, 1, 2]);
/// ```
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
    policy: ShrinkPolicy,
    #[cfg(feature = "metrics")]
    metrics: BufferMetrics,
}

impl<T> RingBuffer<T> {
    /// Creates an empty ring with `initial_capacity` slots.
    pub fn with_policy(initial_capacity: usize, policy: ShrinkPolicy) -> Self {
        Self {
            slots: empty_slots(initial_capacity),
            head: 0,
            len: 0,
            policy,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the shrink policy this ring was built with.
    pub fn policy(&self) -> &ShrinkPolicy {
        &self.policy
    }

    /// Inserts `value` before the current front.
    pub fn push_front(&mut self, value: T) {
        self.grow_if_full();
        let cap = self.capacity();
        self.head = (self.head + cap - 1) % cap;
        self.slots[self.head] = Some(value);
        self.len += 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_push();
    }

    /// Inserts `value` after the current back.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        let tail = self.physical(self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_push();
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        self.after_removal();
        value
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return None;
        }
        let idx = self.physical(self.len - 1);
        let value = self.slots[idx].take();
        self.len -= 1;
        self.after_removal();
        value
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        let found = self.get(0);
        #[cfg(feature = "metrics")]
        self.record_peek(found.is_some());
        found
    }

    /// Returns the back element without removing it.
    pub fn back(&self) -> Option<&T> {
        let found = self.len.checked_sub(1).and_then(|i| self.get(i));
        #[cfg(feature = "metrics")]
        self.record_peek(found.is_some());
        found
    }

    /// Returns the element at logical position `index` (0 is the front).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Returns a borrowed iterator from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// Drops every element and resets indices.
    ///
    /// With auto-shrink enabled the backing store is released as well; the
    /// next push regrows it.
    pub fn reset(&mut self) {
        if self.policy.auto_shrink() {
            self.slots = Vec::new();
        } else {
            self.slots.iter_mut().for_each(|slot| *slot = None);
        }
        self.head = 0;
        self.len = 0;
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Rebuilds the backing store to exactly `len` slots, regardless of
    /// the policy.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.rebuild(self.len);
            #[cfg(feature = "metrics")]
            self.metrics.record_manual_shrink();
        }
    }

    /// Validates the structural invariants of the ring.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let violation = |detail: String| -> Result<(), InvariantError> {
            Err(InvariantError::new("ring buffer", detail))
        };
        let cap = self.capacity();
        if self.len > cap {
            return violation(format!("len {} exceeds capacity {}", self.len, cap));
        }
        if cap == 0 {
            if self.head != 0 {
                return violation(format!("head {} with capacity 0", self.head));
            }
            return Ok(());
        }
        if self.head >= cap {
            return violation(format!(
                "head {} out of bounds for capacity {}",
                self.head, cap
            ));
        }
        for offset in 0..cap {
            let occupied = self.slots[self.physical(offset)].is_some();
            if occupied != (offset < self.len) {
                return violation(format!(
                    "slot at logical offset {} has occupied={} with len {}",
                    offset, occupied, self.len
                ));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if [`check_invariants`](Self::check_invariants) fails.
    pub fn debug_validate_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("invariant violated: {}", e);
        }
    }

    #[inline]
    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.rebuild(grown_capacity(self.capacity()));
            #[cfg(feature = "metrics")]
            self.metrics.record_grow();
        }
    }

    fn after_removal(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_found();
        if self.len == 0 {
            self.head = 0;
        }
        if self.policy.should_shrink(self.len, self.capacity()) {
            self.rebuild(self.len);
            #[cfg(feature = "metrics")]
            self.metrics.record_auto_shrink();
        }
    }

    /// Moves live elements into a fresh store of `new_capacity` slots in
    /// logical order, starting at index 0.
    fn rebuild(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut slots = empty_slots(new_capacity);
        for (offset, slot) in slots.iter_mut().take(self.len).enumerate() {
            let idx = self.physical(offset);
            *slot = self.slots[idx].take();
        }
        self.slots = slots;
        self.head = 0;
    }

    #[cfg(feature = "metrics")]
    fn record_peek(&self, found: bool) {
        self.metrics.record_peek_call();
        if found {
            self.metrics.record_peek_found();
        }
    }

    #[cfg(feature = "metrics")]
    /// Returns a snapshot of this ring's counters.
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.metrics.snapshot(self.len, self.capacity())
    }

    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Returns an independent copy of the live elements, front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            head: self.head,
            len: self.len,
            policy: self.policy,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("items", &DebugItems(self))
            .field("capacity", &self.capacity())
            .field("policy", &self.policy)
            .finish()
    }
}

struct DebugItems<'a, T>(&'a RingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Borrowed front-to-back iterator over a [`RingBuffer`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}


#[cfg(test)]
mod property_tests {
    use std::collections::VecDeque;

    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(u16),
        PushBack(u16),
        PopFront,
        PopBack,
        Reset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u16>().prop_map(Op::PushFront),
            4 => any::<u16>().prop_map(Op::PushBack),
            3 => Just(Op::PopFront),
            3 => Just(Op::PopBack),
            1 => Just(Op::Reset),
        ]
    }

    proptest! {
        /// Property: the ring behaves exactly like a VecDeque model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vecdeque_model(
            ops in prop::collection::vec(op_strategy(), 0..300),
            threshold in 1usize..16,
            ratio in 0.0f64..=1.0,
        ) {
            let policy = ShrinkPolicy::new(threshold, ratio, true);
            let mut ring = RingBuffer::with_policy(4, policy);
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushFront(v) => { ring.push_front(v); model.push_front(v); }
                    Op::PushBack(v) => { ring.push_back(v); model.push_back(v); }
                    Op::PopFront => prop_assert_eq!(ring.pop_front(), model.pop_front()),
                    Op::PopBack => prop_assert_eq!(ring.pop_back(), model.pop_back()),
                    Op::Reset => { ring.reset(); model.clear(); }
                }
                prop_assert_eq!(ring.len(), model.len());
                prop_assert!(ring.capacity() >= ring.len());
                prop_assert_eq!(ring.front(), model.front());
                prop_assert_eq!(ring.back(), model.back());
                prop_assert!(ring.check_invariants().is_ok());
            }
            prop_assert_eq!(ring.to_vec(), model.into_iter().collect::<Vec<_>>());
        }

        /// Property: capacity strictly increases while pushing through growth
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_growth_is_monotonic(count in 1usize..500) {
            let mut ring = RingBuffer::with_policy(2, ShrinkPolicy::default());
            let mut last_cap = ring.capacity();
            for i in 0..count {
                let before = ring.capacity();
                ring.push_back(i);
                if ring.capacity() != before {
                    prop_assert!(ring.capacity() > last_cap);
                    last_cap = ring.capacity();
                }
                prop_assert!(ring.capacity() >= ring.len());
            }
        }
    }
}
