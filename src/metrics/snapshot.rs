/// Point-in-time copy of a container's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BufferMetricsSnapshot {
    pub push_calls: u64,
    pub pop_calls: u64,
    pub pop_found: u64,
    pub pop_empty: u64,
    pub peek_calls: u64,
    pub peek_found: u64,

    pub grow_events: u64,
    pub auto_shrinks: u64,
    pub manual_shrinks: u64,
    pub resets: u64,
    pub sift_steps: u64, // heap only: swaps performed during sift-up/down

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}
