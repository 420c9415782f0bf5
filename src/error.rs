//! Error types for containerkit.
//!
//! Only two things can fail: building a [`ShrinkPolicy`] from bad options
//! ([`ConfigError`]), and an engine self-check finding a corrupted layout
//! ([`InvariantError`]). Popping or peeking an empty container returns `None`.
//!
//! ```
//! use containerkit::builder::ContainerBuilder;
//! use containerkit::error::ConfigError;
//!
//! let err = ContainerBuilder::new()
//!     .shrink_usage_ratio(1.5)
//!     .try_build_queue::<u32>()
//!     .unwrap_err();
//! assert_eq!(err, ConfigError::UsageRatioOutOfRange(1.5));
//! assert_eq!(err.option(), "shrink_usage_ratio");
//! ```
//!
//! [`ShrinkPolicy`]: crate::policy::ShrinkPolicy

use std::fmt;

/// Invalid shrink-policy option, reported by
/// [`ShrinkPolicy::try_new`](crate::policy::ShrinkPolicy::try_new) and the
/// builder's `try_*` methods.
///
/// The first failing option wins; the threshold is checked before the ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `shrink_threshold` was zero.
    ZeroShrinkThreshold,
    /// `shrink_usage_ratio` was NaN, infinite, or outside `[0.0, 1.0]`.
    UsageRatioOutOfRange(f64),
}

impl ConfigError {
    /// Name of the [`ContainerBuilder`](crate::builder::ContainerBuilder)
    /// setter whose value was rejected.
    pub fn option(&self) -> &'static str {
        match self {
            Self::ZeroShrinkThreshold => "shrink_threshold",
            Self::UsageRatioOutOfRange(_) => "shrink_usage_ratio",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroShrinkThreshold => {
                f.write_str("shrink threshold must be greater than zero")
            },
            Self::UsageRatioOutOfRange(ratio) => {
                write!(f, "shrink usage ratio must be in [0.0, 1.0], got {}", ratio)
            },
        }
    }
}

impl std::error::Error for ConfigError {}

/// Layout violation found by an engine's `check_invariants`.
///
/// `structure` names the engine (`"ring buffer"`, `"linear buffer"`,
/// `"comparator heap"`); `detail` says which slot or index is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError {
    structure: &'static str,
    detail: String,
}

impl InvariantError {
    pub(crate) fn new(structure: &'static str, detail: impl Into<String>) -> Self {
        Self {
            structure,
            detail: detail.into(),
        }
    }

    pub fn structure(&self) -> &'static str {
        self.structure
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.structure, self.detail)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ContainerBuilder;
    use crate::ds::{ComparatorHeap, LinearBuffer, MinFirst, RingBuffer};
    use crate::policy::ShrinkPolicy;

    #[test]
    fn threshold_is_checked_before_ratio() {
        let err = ShrinkPolicy::try_new(0, 7.0, true).unwrap_err();
        assert_eq!(err, ConfigError::ZeroShrinkThreshold);
        assert_eq!(err.option(), "shrink_threshold");
    }

    #[test]
    fn ratio_error_carries_rejected_value() {
        match ShrinkPolicy::try_new(16, -0.5, false) {
            Err(ConfigError::UsageRatioOutOfRange(r)) => assert_eq!(r, -0.5),
            other => panic!("unexpected result: {:?}", other),
        }
        let err = ShrinkPolicy::try_new(16, f64::NAN, false).unwrap_err();
        assert_eq!(err.option(), "shrink_usage_ratio");
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn every_try_build_reports_the_same_option() {
        let builder = ContainerBuilder::new().shrink_threshold(0);
        let errs = [
            builder.try_build_deque::<u8>().unwrap_err(),
            builder.try_build_queue::<u8>().unwrap_err(),
            builder.try_build_stack::<u8>().unwrap_err(),
        ];
        assert!(errs.iter().all(|e| *e == ConfigError::ZeroShrinkThreshold));
    }

    #[test]
    fn boxed_as_std_error() {
        let err: Box<dyn std::error::Error> = ContainerBuilder::new()
            .shrink_usage_ratio(2.0)
            .try_policy()
            .unwrap_err()
            .into();
        assert_eq!(
            err.to_string(),
            "shrink usage ratio must be in [0.0, 1.0], got 2"
        );
    }

    #[test]
    fn healthy_engines_pass_their_self_checks() {
        let mut ring = RingBuffer::with_policy(2, ShrinkPolicy::default());
        let mut linear = LinearBuffer::with_policy(ShrinkPolicy::default());
        let mut heap = ComparatorHeap::new(MinFirst);
        for v in [3, 1, 2] {
            ring.push_front(v);
            linear.push(v);
            heap.push(v);
        }
        assert_eq!(ring.check_invariants(), Ok(()));
        assert_eq!(linear.check_invariants(), Ok(()));
        assert_eq!(heap.check_invariants(), Ok(()));
    }

    #[test]
    fn invariant_display_prefixes_structure() {
        let err = InvariantError::new("ring buffer", "head 9 out of bounds for capacity 4");
        assert_eq!(err.structure(), "ring buffer");
        assert_eq!(
            err.to_string(),
            "ring buffer: head 9 out of bounds for capacity 4"
        );
    }
}
