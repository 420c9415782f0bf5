//! containerkit: generic in-memory containers with a configurable shrink policy.
//!
//! Deque, queue and stack sit on growable ring/linear buffers that give
//! memory back according to a [`ShrinkPolicy`](policy::ShrinkPolicy); the
//! heap orders elements with a caller-supplied comparator; the set is a
//! hash-table membership wrapper.
//!
//! Containers are single-owner: they are not synchronized internally.

pub mod builder;
pub mod collections;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod traits;
