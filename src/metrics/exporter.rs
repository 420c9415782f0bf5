use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::BufferMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for container metrics snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped directly or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // `export` cannot return errors; a failed scrape write only loses
        // that sample, the counters themselves are unaffected.
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<BufferMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &BufferMetricsSnapshot) {
        self.write_counter("push_calls_total", snapshot.push_calls);
        self.write_counter("pop_calls_total", snapshot.pop_calls);
        self.write_counter("pop_found_total", snapshot.pop_found);
        self.write_counter("pop_empty_total", snapshot.pop_empty);
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_found_total", snapshot.peek_found);
        self.write_counter("grow_events_total", snapshot.grow_events);
        self.write_counter("auto_shrinks_total", snapshot.auto_shrinks);
        self.write_counter("manual_shrinks_total", snapshot.manual_shrinks);
        self.write_counter("resets_total", snapshot.resets);
        self.write_counter("sift_steps_total", snapshot.sift_steps);
        self.write_gauge("len", snapshot.len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("deque", Vec::new());
        let snapshot = BufferMetricsSnapshot {
            push_calls: 3,
            grow_events: 1,
            len: 3,
            capacity: 4,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE deque_push_calls_total counter"));
        assert!(text.contains("deque_push_calls_total 3"));
        assert!(text.contains("deque_grow_events_total 1"));
        assert!(text.contains("# TYPE deque_capacity gauge"));
        assert!(text.contains("deque_capacity 4"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&BufferMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE len gauge\nlen 0\n"));
        assert!(text.contains("push_calls_total 0"));
    }
}
