//! # Container Capability Traits
//!
//! Small traits shared by the facades in [`collections`](crate::collections),
//! so callers can write code generic over "something with a length that can
//! be reset and copied out".
//!
//! ```text
//!                ┌─────────────────────────────┐
//!                │         Container           │
//!                │  len / is_empty / reset     │
//!                └──────────────┬──────────────┘
//!                               │
//!             ┌─────────────────┴─────────────────┐
//!             ▼                                   ▼
//!   ┌───────────────────────┐         ┌───────────────────────┐
//!   │      Shrinkable       │         │     Snapshot<T>       │
//!   │  capacity / policy    │         │  snapshot → Vec<T>    │
//!   │  Deque, Queue, Stack  │         │  every facade         │
//!   └───────────────────────┘         └───────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use containerkit::collections::{Deque, Stack};
//! use containerkit::traits::{Container, Snapshot};
//!
//! fn drain_report<C: Container + Snapshot<i32>>(c: &mut C) -> Vec<i32> {
//!     let items = c.snapshot();
//!     c.reset();
//!     items
//! }
//!
//! let mut deque: Deque<i32> = (1..=3).collect();
//! let mut stack: Stack<i32> = (1..=3).collect();
//! assert_eq!(drain_report(&mut deque), vec![1, 2, 3]);
//! assert_eq!(drain_report(&mut stack), vec![1, 2, 3]);
//! assert!(deque.is_empty() && stack.is_empty());
//! ```

use crate::policy::ShrinkPolicy;

/// Operations every container supports.
pub trait Container {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all elements. Calling it twice is the same as calling it once.
    fn reset(&mut self);
}

/// Independent, ordered copy of a container's contents.
///
/// Mutating the returned `Vec` never affects the container.
pub trait Snapshot<T> {
    fn snapshot(&self) -> Vec<T>;
}

/// Containers whose backing store is governed by a [`ShrinkPolicy`].
pub trait Shrinkable: Container {
    /// Slots currently allocated in the backing store.
    fn capacity(&self) -> usize;

    fn policy(&self) -> &ShrinkPolicy;
}
