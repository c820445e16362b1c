// Tue Feb 10 2026 - Alex

use std::sync::Arc;

use parking_lot::Mutex;

/// Counters for one query's remote traffic. Diagnostics only; correctness
/// never depends on these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadMetrics {
    pub read8_calls: u64,
    pub read16_calls: u64,
    pub read32_calls: u64,
    pub read_range_calls: u64,
    pub read_ranges_calls: u64,
    pub ranges_read: u64,
    pub bytes_requested: u64,
    pub bytes_returned: u64,
}

impl ReadMetrics {
    pub fn total_calls(&self) -> u64 {
        self.read8_calls
            + self.read16_calls
            + self.read32_calls
            + self.read_range_calls
            + self.read_ranges_calls
    }
}

/// Shared handle to the metrics of a single query. A scope is created at
/// query start and dropped at query end; there is no global accumulator,
/// so concurrent queries cannot see each other's counts.
#[derive(Debug, Clone, Default)]
pub struct MetricsScope {
    inner: Arc<Mutex<ReadMetrics>>,
}

impl MetricsScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_read8(&self) {
        let mut m = self.inner.lock();
        m.read8_calls += 1;
        m.bytes_requested += 1;
        m.bytes_returned += 1;
    }

    pub fn record_read16(&self) {
        let mut m = self.inner.lock();
        m.read16_calls += 1;
        m.bytes_requested += 2;
        m.bytes_returned += 2;
    }

    pub fn record_read32(&self) {
        let mut m = self.inner.lock();
        m.read32_calls += 1;
        m.bytes_requested += 4;
        m.bytes_returned += 4;
    }

    pub fn record_read_range(&self, requested: usize, returned: usize) {
        let mut m = self.inner.lock();
        m.read_range_calls += 1;
        m.bytes_requested += requested as u64;
        m.bytes_returned += returned as u64;
    }

    pub fn record_read_ranges(&self, ranges: usize, requested: usize, returned: usize) {
        let mut m = self.inner.lock();
        m.read_ranges_calls += 1;
        m.ranges_read += ranges as u64;
        m.bytes_requested += requested as u64;
        m.bytes_returned += returned as u64;
    }

    pub fn snapshot(&self) -> ReadMetrics {
        *self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_accumulates() {
        let scope = MetricsScope::new();
        scope.record_read8();
        scope.record_read32();
        scope.record_read_range(100, 100);
        scope.record_read_ranges(3, 60, 48);
        let m = scope.snapshot();
        assert_eq!(m.read8_calls, 1);
        assert_eq!(m.read32_calls, 1);
        assert_eq!(m.read_range_calls, 1);
        assert_eq!(m.read_ranges_calls, 1);
        assert_eq!(m.ranges_read, 3);
        assert_eq!(m.bytes_requested, 1 + 4 + 100 + 60);
        assert_eq!(m.bytes_returned, 1 + 4 + 100 + 48);
        assert_eq!(m.total_calls(), 4);
    }

    #[test]
    fn test_scopes_are_isolated() {
        let a = MetricsScope::new();
        let b = MetricsScope::new();
        a.record_read8();
        assert_eq!(b.snapshot(), ReadMetrics::default());
    }
}
