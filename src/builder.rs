//! Option builder for the shrinkable containers.
//!
//! Setters fold options onto the defaults (`auto_shrink = true`,
//! `shrink_threshold = 1024`, `shrink_usage_ratio = 0.25`); validation runs
//! once, when a container is built.
//!
//! ## Example
//!
//! ```rust
//! use containerkit::builder::ContainerBuilder;
//!
//! let mut deque = ContainerBuilder::new()
//!     .shrink_threshold(16)
//!     .shrink_usage_ratio(0.5)
//!     .build_deque::<u64>();
//! deque.push_back(1);
//! assert_eq!(deque.policy().threshold_capacity(), 16);
//!
//! let bad = ContainerBuilder::new().shrink_usage_ratio(1.5).try_build_stack::<u64>();
//! assert!(bad.is_err());
//! ```

use crate::collections::{Deque, Queue, Stack};
use crate::error::ConfigError;
use crate::policy::{DEFAULT_SHRINK_THRESHOLD, DEFAULT_SHRINK_USAGE_RATIO, ShrinkPolicy};

/// Builder for [`Deque`], [`Queue`] and [`Stack`] instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBuilder {
    auto_shrink: bool,
    shrink_threshold: usize,
    shrink_usage_ratio: f64,
}

impl ContainerBuilder {
    /// Starts from the default options.
    pub fn new() -> Self {
        Self {
            auto_shrink: true,
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
            shrink_usage_ratio: DEFAULT_SHRINK_USAGE_RATIO,
        }
    }

    /// Enables or disables automatic shrinking on pop/reset.
    pub fn auto_shrink(mut self, enabled: bool) -> Self {
        self.auto_shrink = enabled;
        self
    }

    /// Capacity that must be exceeded before a shrink is considered.
    pub fn shrink_threshold(mut self, capacity: usize) -> Self {
        self.shrink_threshold = capacity;
        self
    }

    /// Usage fraction below which the store is compacted.
    pub fn shrink_usage_ratio(mut self, ratio: f64) -> Self {
        self.shrink_usage_ratio = ratio;
        self
    }

    /// Validates the options and returns the resulting policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the threshold is zero or the ratio is
    /// outside `[0.0, 1.0]`.
    pub fn try_policy(&self) -> Result<ShrinkPolicy, ConfigError> {
        ShrinkPolicy::try_new(
            self.shrink_threshold,
            self.shrink_usage_ratio,
            self.auto_shrink,
        )
    }

    pub fn try_build_deque<T>(&self) -> Result<Deque<T>, ConfigError> {
        Ok(Deque::with_policy(self.try_policy()?))
    }

    pub fn try_build_queue<T>(&self) -> Result<Queue<T>, ConfigError> {
        Ok(Queue::with_policy(self.try_policy()?))
    }

    pub fn try_build_stack<T>(&self) -> Result<Stack<T>, ConfigError> {
        Ok(Stack::with_policy(self.try_policy()?))
    }

    /// # Panics
    ///
    /// Panics if the options are invalid; see [`try_policy`](Self::try_policy).
    pub fn build_deque<T>(&self) -> Deque<T> {
        Deque::with_policy(self.policy_or_panic())
    }

    /// # Panics
    ///
    /// Panics if the options are invalid; see [`try_policy`](Self::try_policy).
    pub fn build_queue<T>(&self) -> Queue<T> {
        Queue::with_policy(self.policy_or_panic())
    }

    /// # Panics
    ///
    /// Panics if the options are invalid; see [`try_policy`](Self::try_policy).
    pub fn build_stack<T>(&self) -> Stack<T> {
        Stack::with_policy(self.policy_or_panic())
    }

    fn policy_or_panic(&self) -> ShrinkPolicy {
        match self.try_policy() {
            Ok(policy) => policy,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy_defaults() {
        let policy = ContainerBuilder::new().try_policy().unwrap();
        assert_eq!(policy, ShrinkPolicy::default());
    }

    #[test]
    fn setters_fold_in_any_order() {
        let a = ContainerBuilder::new()
            .shrink_threshold(8)
            .auto_shrink(false)
            .shrink_usage_ratio(0.5);
        let b = ContainerBuilder::new()
            .shrink_usage_ratio(0.5)
            .shrink_threshold(8)
            .auto_shrink(false);
        assert_eq!(a.try_policy().unwrap(), b.try_policy().unwrap());
        assert!(!a.try_policy().unwrap().auto_shrink());
    }

    #[test]
    fn later_setter_wins() {
        let policy = ContainerBuilder::new()
            .shrink_threshold(8)
            .shrink_threshold(32)
            .try_policy()
            .unwrap();
        assert_eq!(policy.threshold_capacity(), 32);
    }

    #[test]
    fn invalid_options_fail_every_try_build() {
        let builder = ContainerBuilder::new().shrink_threshold(0);
        assert!(builder.try_build_deque::<u8>().is_err());
        assert!(builder.try_build_queue::<u8>().is_err());
        assert!(builder.try_build_stack::<u8>().is_err());
    }

    #[test]
    fn errors_name_the_rejected_setter() {
        let threshold = ContainerBuilder::new().shrink_threshold(0).try_policy();
        assert_eq!(threshold.unwrap_err().option(), "shrink_threshold");

        let ratio = ContainerBuilder::new()
            .shrink_usage_ratio(f64::INFINITY)
            .try_build_deque::<u8>()
            .unwrap_err();
        assert_eq!(ratio, ConfigError::UsageRatioOutOfRange(f64::INFINITY));
        assert_eq!(ratio.option(), "shrink_usage_ratio");
    }

    #[test]
    #[should_panic(expected = "threshold")]
    fn build_panics_on_invalid_options() {
        let _ = ContainerBuilder::new().shrink_threshold(0).build_queue::<u8>();
    }

    #[test]
    fn built_containers_carry_the_policy() {
        let builder = ContainerBuilder::new().shrink_threshold(10).shrink_usage_ratio(0.5);
        let deque = builder.build_deque::<u8>();
        let queue = builder.build_queue::<u8>();
        let stack = builder.build_stack::<u8>();
        assert_eq!(deque.policy().threshold_capacity(), 10);
        assert_eq!(queue.policy().usage_ratio(), 0.5);
        assert!(stack.policy().auto_shrink());
    }
}
