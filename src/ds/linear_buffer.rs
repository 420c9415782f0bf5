//! Contiguous buffer with a single growth end, backing [`Stack`].
//!
//! Elements live in `slots[0..top)`; `slots[top - 1]` is the most recently
//! pushed element. Capacity is tracked as the slot count so that growth and
//! shrink decisions are deterministic for every element type.
//!
//! [`Stack`]: crate::collections::Stack
//!
//! ```text
//!   index:   0     1     2     3     4     5     6     7
//!          ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!   slots: │  A  │  B  │  C  │  D  │  E  │     │     │     │
//!          └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!                                          ▲
//!                                       top = 5
//! ```
//!
//! Growth happens only when `top == capacity` (doubling, minimum 4). Pops
//! clear the vacated slot, then consult the [`ShrinkPolicy`]. Manual
//! compaction via [`shrink_now`](LinearBuffer::shrink_now) ignores the policy.

use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BufferMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{BufferMetricsReadRecorder, BufferMetricsRecorder};
use crate::policy::{ShrinkPolicy, grown_capacity};

/// Growable, shrinkable LIFO buffer.
///
/// # Example
///
/// ```
/// use containerkit::ds::LinearBuffer;
/// use containerkit::policy::ShrinkPolicy;
///
/// let mut buf = LinearBuffer::with_policy(ShrinkPolicy::default());
/// buf.push("a");
/// buf.push("b");
/// assert_eq!(buf.peek(), Some(&"b"));
/// assert_eq!(buf.pop(), Some("b"));
/// assert_eq!(buf.to_vec(), vec!["a"]);
/// ```
#[derive(Debug)]
pub struct LinearBuffer<T> {
    slots: Vec<Option<T>>,
    top: usize,
    policy: ShrinkPolicy,
    #[cfg(feature = "metrics")]
    metrics: BufferMetrics,
}

impl<T> LinearBuffer<T> {
    /// Creates an empty buffer with no backing storage.
    pub fn with_policy(policy: ShrinkPolicy) -> Self {
        Self {
            slots: Vec::new(),
            top: 0,
            policy,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> &ShrinkPolicy {
        &self.policy
    }

    /// Pushes `value` on top, doubling the store if it is full.
    pub fn push(&mut self, value: T) {
        if self.top == self.capacity() {
            let new_capacity = grown_capacity(self.capacity());
            self.slots.resize_with(new_capacity, || None);
            #[cfg(feature = "metrics")]
            self.metrics.record_grow();
        }
        self.slots[self.top] = Some(value);
        self.top += 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_push();
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.top == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return None;
        }
        self.top -= 1;
        let value = self.slots[self.top].take();
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_found();
        if self.policy.should_shrink(self.top, self.capacity()) {
            self.compact();
            #[cfg(feature = "metrics")]
            self.metrics.record_auto_shrink();
        }
        value
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        let found = self
            .top
            .checked_sub(1)
            .and_then(|idx| self.slots[idx].as_ref());
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_peek_call();
            if found.is_some() {
                self.metrics.record_peek_found();
            }
        }
        found
    }

    /// Compacts the store to exactly `len` slots, even if auto-shrink is off.
    pub fn shrink_now(&mut self) {
        if self.top < self.capacity() {
            self.compact();
            #[cfg(feature = "metrics")]
            self.metrics.record_manual_shrink();
        }
    }

    /// Drops every element; releases the store when auto-shrink is enabled.
    pub fn reset(&mut self) {
        if self.policy.auto_shrink() {
            self.slots = Vec::new();
        } else {
            self.slots[..self.top].iter_mut().for_each(|slot| *slot = None);
        }
        self.top = 0;
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Borrowed iterator from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.slots[..self.top].iter().flatten()
    }

    /// Checks that exactly `slots[0..top)` are occupied.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let violation = |detail: String| -> Result<(), InvariantError> {
            Err(InvariantError::new("linear buffer", detail))
        };
        if self.top > self.capacity() {
            return violation(format!(
                "top {} exceeds capacity {}",
                self.top,
                self.capacity()
            ));
        }
        if let Some(idx) = self.slots[..self.top].iter().position(Option::is_none) {
            return violation(format!("slot {} below top {} is empty", idx, self.top));
        }
        if let Some(offset) = self.slots[self.top..].iter().position(Option::is_some) {
            return violation(format!(
                "slot {} above top {} is still occupied",
                self.top + offset,
                self.top
            ));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("invariant violated: {}", e);
        }
    }

    fn compact(&mut self) {
        self.slots.truncate(self.top);
        self.slots.shrink_to_fit();
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.metrics.snapshot(self.top, self.capacity())
    }

    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl<T: Clone> LinearBuffer<T> {
    /// Returns an independent copy of the live elements, bottom to top.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for LinearBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            top: self.top,
            policy: self.policy,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the buffer behaves exactly like a Vec used as a stack
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vec_model(
            ops in prop::collection::vec(prop::option::of(any::<i32>()), 0..300),
            threshold in 1usize..16,
        ) {
            let mut buf = LinearBuffer::with_policy(ShrinkPolicy::new(threshold, 0.25, true));
            let mut model = Vec::new();
            for op in ops {
                match op {
                    Some(v) => { buf.push(v); model.push(v); }
                    None => prop_assert_eq!(buf.pop(), model.pop()),
                }
                prop_assert_eq!(buf.peek(), model.last());
                prop_assert!(buf.capacity() >= buf.len());
                prop_assert!(buf.check_invariants().is_ok());
            }
            prop_assert_eq!(buf.to_vec(), model);
        }
    }
}
