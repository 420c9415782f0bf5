pub use crate::builder::ContainerBuilder;
pub use crate::collections::{Deque, Heap, Queue, Set, Stack};
pub use crate::ds::{Comparator, MaxFirst, MinFirst};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::ShrinkPolicy;
pub use crate::traits::{Container, Shrinkable, Snapshot};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::BufferMetricsSnapshot;
