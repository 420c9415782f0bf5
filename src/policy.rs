//! Growth/shrink policy shared by the buffer engines.
//!
//! A [`ShrinkPolicy`] is an immutable configuration value deciding when a
//! buffer should give memory back after removals. Growth is not configurable:
//! engines double their capacity (minimum [`MIN_GROW_CAPACITY`]) whenever a
//! push finds them full.
//!
//! ## Shrink Rule
//!
//! ```text
//!   should_shrink(len, capacity) =
//!        auto_shrink
//!     && capacity > threshold_capacity
//!     && len < capacity * usage_ratio
//!
//!   threshold = 10, ratio = 0.25
//!
//!   capacity 32 │ len 8  → 8 < 8.0   false (keep)
//!   capacity 32 │ len 7  → 7 < 8.0   true  (rebuild to capacity 7)
//!   capacity 7  │ len 1  → 7 > 10    false (below threshold, never shrink)
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use containerkit::policy::ShrinkPolicy;
//!
//! let policy = ShrinkPolicy::try_new(10, 0.25, true).unwrap();
//! assert!(policy.should_shrink(7, 32));
//! assert!(!policy.should_shrink(8, 32));
//! assert!(!policy.should_shrink(0, 8));
//! ```

use crate::error::ConfigError;

/// Capacity below which shrinking is never attempted, by default.
pub const DEFAULT_SHRINK_THRESHOLD: usize = 1024;

/// Default usage ratio under which a buffer is compacted.
pub const DEFAULT_SHRINK_USAGE_RATIO: f64 = 0.25;

/// Smallest capacity a buffer grows to from an empty backing store.
pub const MIN_GROW_CAPACITY: usize = 4;

/// Immutable shrink configuration.
///
/// Construct with [`ShrinkPolicy::try_new`] (fallible) or
/// [`ShrinkPolicy::new`] (panics on invalid input), or start from
/// [`Default`] and use the [`ContainerBuilder`](crate::builder::ContainerBuilder).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkPolicy {
    threshold_capacity: usize,
    usage_ratio: f64,
    auto_shrink: bool,
}

impl ShrinkPolicy {
    /// Creates a policy, panicking if the parameters are invalid.
    ///
    /// # Panics
    ///
    /// Panics with the [`ConfigError`] message when
    /// [`try_new`](Self::try_new) would fail.
    pub fn new(threshold_capacity: usize, usage_ratio: f64, auto_shrink: bool) -> Self {
        match Self::try_new(threshold_capacity, usage_ratio, auto_shrink) {
            Ok(policy) => policy,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a policy, returning an error on invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `threshold_capacity` is zero or
    /// `usage_ratio` is not a finite value in `[0.0, 1.0]`.
    pub fn try_new(
        threshold_capacity: usize,
        usage_ratio: f64,
        auto_shrink: bool,
    ) -> Result<Self, ConfigError> {
        validate_threshold(threshold_capacity)?;
        validate_usage_ratio(usage_ratio)?;
        Ok(Self {
            threshold_capacity,
            usage_ratio,
            auto_shrink,
        })
    }

    /// A policy that never shrinks automatically.
    ///
    /// Manual compaction (`shrink_now`, `shrink_to_fit`) still works.
    pub fn disabled() -> Self {
        Self {
            auto_shrink: false,
            ..Self::default()
        }
    }

    /// Minimum capacity that must be exceeded before shrinking.
    pub fn threshold_capacity(&self) -> usize {
        self.threshold_capacity
    }

    /// Fraction of capacity below which the buffer is compacted.
    pub fn usage_ratio(&self) -> f64 {
        self.usage_ratio
    }

    /// Returns `true` if automatic shrinking is enabled.
    pub fn auto_shrink(&self) -> bool {
        self.auto_shrink
    }

    /// Decides whether a buffer holding `len` live elements in `capacity`
    /// slots should be rebuilt to exactly `len` slots.
    #[inline]
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        self.auto_shrink
            && capacity > self.threshold_capacity
            && (len as f64) < capacity as f64 * self.usage_ratio
    }
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        Self {
            threshold_capacity: DEFAULT_SHRINK_THRESHOLD,
            usage_ratio: DEFAULT_SHRINK_USAGE_RATIO,
            auto_shrink: true,
        }
    }
}

/// Capacity after doubling a full buffer of `capacity` slots.
#[inline]
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(MIN_GROW_CAPACITY)
}

pub(crate) fn validate_threshold(threshold_capacity: usize) -> Result<(), ConfigError> {
    if threshold_capacity == 0 {
        return Err(ConfigError::ZeroShrinkThreshold);
    }
    Ok(())
}

pub(crate) fn validate_usage_ratio(usage_ratio: f64) -> Result<(), ConfigError> {
    if !usage_ratio.is_finite() || !(0.0..=1.0).contains(&usage_ratio) {
        return Err(ConfigError::UsageRatioOutOfRange(usage_ratio));
    }
    Ok(())
}
