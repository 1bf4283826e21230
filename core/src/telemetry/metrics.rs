use std::sync::Mutex;

/// Run-local tallies kept by the detection engine.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub scanned: usize,
    pub in_range: usize,
    pub dropped: usize,
    pub rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    /// Clears the tallies; called at the start of each detection cycle.
    pub fn reset(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            *metrics = MetricsSnapshot::default();
        }
    }

    pub fn record_scan(&self, scanned: usize, in_range: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.scanned += scanned;
            metrics.in_range += in_range;
            metrics.dropped += scanned.saturating_sub(in_range);
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_accumulate_dropped_tracks() {
        let metrics = MetricsRecorder::new();
        metrics.record_scan(10, 7);
        metrics.record_scan(3, 3);
        metrics.record_rejected();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                scanned: 13,
                in_range: 10,
                dropped: 3,
                rejected: 1,
            }
        );
    }

    #[test]
    fn reset_clears_previous_tallies() {
        let metrics = MetricsRecorder::new();
        metrics.record_scan(4, 1);
        metrics.record_rejected();
        metrics.reset();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }
}
