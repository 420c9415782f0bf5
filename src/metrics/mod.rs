//! Optional operation counters for the containers (feature `metrics`).
//!
//! Each engine owns a [`BufferMetrics`] block and bumps it inline. Read-only
//! paths (`peek`, `front`, `back`) go through [`MetricsCell`], so enabling
//! this feature makes containers `!Sync`.
//!
//! ```text
//!   engine ──record──► BufferMetrics ──snapshot(len, cap)──► BufferMetricsSnapshot
//!                                                                   │
//!                                                                   ▼
//!                                                  MetricsExporter (Prometheus text)
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use cell::MetricsCell;
pub use exporter::PrometheusTextExporter;
pub use metrics_impl::BufferMetrics;
pub use snapshot::BufferMetricsSnapshot;
pub use traits::{
    BufferMetricsReadRecorder, BufferMetricsRecorder, MetricsExporter, MetricsSnapshotProvider,
};
