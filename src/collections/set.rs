//! Hash-set membership container.
//!
//! A thin wrapper over [`FxHashSet`]; `values()` has no defined order.
//!
//! ```
//! use containerkit::collections::Set;
//!
//! let mut set = Set::new();
//! assert!(set.add("a"));
//! assert!(!set.add("a"));
//! assert!(set.contains(&"a"));
//! assert_eq!(set.len(), 1);
//! assert!(set.remove(&"a"));
//! assert!(set.is_empty());
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::traits::{Container, Snapshot};

/// Unordered membership set backed by [`FxHashSet`].
#[derive(Debug, Clone)]
pub struct Set<T> {
    data: FxHashSet<T>,
}

impl<T> Set<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            data: FxHashSet::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts `value`; returns `false` if it was already present.
    pub fn add(&mut self, value: T) -> bool {
        self.data.insert(value)
    }

    /// Removes `value`; returns `false` if it was absent.
    pub fn remove(&mut self, value: &T) -> bool {
        self.data.remove(value)
    }

    /// Returns `true` if `value` is a member.
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every member and releases the table.
    pub fn clear(&mut self) {
        self.data = FxHashSet::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }
}

impl<T> Set<T>
where
    T: Eq + Hash + Clone,
{
    /// Unordered copy of the members.
    pub fn values(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Container for Set<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T: Eq + Hash + Clone> Snapshot<T> for Set<T> {
    fn snapshot(&self) -> Vec<T> {
        self.values()
    }
}
