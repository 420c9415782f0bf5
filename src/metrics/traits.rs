//! # Metrics Traits
//!
//! Recording is split from export: engines only write counters through the
//! recorder traits, snapshots are plain values, and exporters only publish
//! snapshots.

/// Counters written by mutating container operations.
pub trait BufferMetricsRecorder {
    fn record_push(&mut self);
    fn record_pop_found(&mut self);
    fn record_pop_empty(&mut self);
    fn record_grow(&mut self);
    fn record_auto_shrink(&mut self);
    fn record_manual_shrink(&mut self);
    fn record_reset(&mut self);
    fn record_sift_step(&mut self);
}

/// Counters written by `&self` operations (uses interior mutability).
pub trait BufferMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Export/publish metrics to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}

/// Containers that can report a point-in-time snapshot of their counters.
pub trait MetricsSnapshotProvider<S> {
    fn metrics_snapshot(&self) -> S;
}
