use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::BufferMetricsSnapshot;
use crate::metrics::traits::{BufferMetricsReadRecorder, BufferMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct BufferMetrics {
    pub push_calls: u64,
    pub pop_calls: u64,
    pub pop_found: u64,
    pub pop_empty: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub grow_events: u64,
    pub auto_shrinks: u64,
    pub manual_shrinks: u64,
    pub resets: u64,
    pub sift_steps: u64,
}

impl BufferMetrics {
    /// Copies the counters, pairing them with the caller's current gauges.
    pub fn snapshot(&self, len: usize, capacity: usize) -> BufferMetricsSnapshot {
        BufferMetricsSnapshot {
            push_calls: self.push_calls,
            pop_calls: self.pop_calls,
            pop_found: self.pop_found,
            pop_empty: self.pop_empty,
            peek_calls: self.peek_calls.get(),
            peek_found: self.peek_found.get(),
            grow_events: self.grow_events,
            auto_shrinks: self.auto_shrinks,
            manual_shrinks: self.manual_shrinks,
            resets: self.resets,
            sift_steps: self.sift_steps,
            len,
            capacity,
        }
    }

    /// Zeroes every counter, including the read-path cells.
    pub fn reset_metrics(&mut self) {
        self.push_calls = 0;
        self.pop_calls = 0;
        self.pop_found = 0;
        self.pop_empty = 0;
        self.grow_events = 0;
        self.auto_shrinks = 0;
        self.manual_shrinks = 0;
        self.resets = 0;
        self.sift_steps = 0;
        self.peek_calls.reset();
        self.peek_found.reset();
    }
}

impl BufferMetricsRecorder for BufferMetrics {
    #[inline]
    fn record_push(&mut self) {
        self.push_calls += 1;
    }

    #[inline]
    fn record_pop_found(&mut self) {
        self.pop_calls += 1;
        self.pop_found += 1;
    }

    #[inline]
    fn record_pop_empty(&mut self) {
        self.pop_calls += 1;
        self.pop_empty += 1;
    }

    #[inline]
    fn record_grow(&mut self) {
        self.grow_events += 1;
    }

    #[inline]
    fn record_auto_shrink(&mut self) {
        self.auto_shrinks += 1;
    }

    #[inline]
    fn record_manual_shrink(&mut self) {
        self.manual_shrinks += 1;
    }

    #[inline]
    fn record_reset(&mut self) {
        self.resets += 1;
    }

    #[inline]
    fn record_sift_step(&mut self) {
        self.sift_steps += 1;
    }
}

impl BufferMetricsReadRecorder for BufferMetrics {
    #[inline]
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    #[inline]
    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}
