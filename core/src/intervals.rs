//! Per-target buff interval tracking.
//!
//! Tracks when a buff was applied to each target and, as intervals close,
//! accumulates their total duration, how many closed, and how far past the
//! base duration they ran (extension). A target has at most one open
//! interval; absence from the map means none is open.

use hashbrown::HashMap;

#[derive(Debug, Clone)]
pub struct BuffIntervalTracker {
    base_duration_ms: i64,
    /// Target id -> timestamp the current interval started
    open: HashMap<i64, i64>,
    total_duration_ms: i64,
    total_extension_ms: i64,
    closed: u32,
}

impl BuffIntervalTracker {
    pub fn new(base_duration_ms: i64) -> Self {
        Self {
            base_duration_ms,
            open: HashMap::new(),
            total_duration_ms: 0,
            total_extension_ms: 0,
            closed: 0,
        }
    }

    pub fn apply(&mut self, target: i64, timestamp: i64) {
        self.open.insert(target, timestamp);
    }

    /// Close the current interval (if any) and open a new one at the same
    /// timestamp.
    pub fn refresh(&mut self, target: i64, timestamp: i64) {
        if !self.close(target, timestamp) {
            tracing::debug!(target_id = target, timestamp, "Refresh without an open interval");
        }
        self.apply(target, timestamp);
    }

    pub fn remove(&mut self, target: i64, timestamp: i64) {
        self.close(target, timestamp);
    }

    /// Force-close every open interval, e.g. at fight end.
    pub fn close_all(&mut self, timestamp: i64) {
        let targets: Vec<i64> = self.open.keys().copied().collect();
        for target in targets {
            self.close(target, timestamp);
        }
    }

    /// Returns false when `target` had no open interval.
    fn close(&mut self, target: i64, timestamp: i64) -> bool {
        let Some(start) = self.open.remove(&target) else {
            return false;
        };
        let duration = timestamp - start;
        self.total_duration_ms += duration;
        self.closed += 1;
        let extension = duration - self.base_duration_ms;
        if extension > 0 {
            self.total_extension_ms += extension;
        }
        true
    }

    /// Time since `target`'s open interval started, or `None` if closed.
    pub fn elapsed(&self, target: i64, timestamp: i64) -> Option<i64> {
        self.open.get(&target).map(|start| timestamp - start)
    }

    /// Whether an effect from `target` at `timestamp` has been active for at
    /// least the base duration.
    pub fn has_qualified(&self, target: i64, timestamp: i64) -> bool {
        self.elapsed(target, timestamp)
            .is_some_and(|elapsed| elapsed >= self.base_duration_ms)
    }

    pub fn is_open(&self, target: i64) -> bool {
        self.open.contains_key(&target)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn base_duration_ms(&self) -> i64 {
        self.base_duration_ms
    }

    pub fn total_duration_ms(&self) -> i64 {
        self.total_duration_ms
    }

    pub fn total_extension_ms(&self) -> i64 {
        self.total_extension_ms
    }

    pub fn closed_count(&self) -> u32 {
        self.closed
    }

    /// Mean closed interval length in ms; `None` until one has closed.
    pub fn average_duration_ms(&self) -> Option<f64> {
        (self.closed > 0).then(|| self.total_duration_ms as f64 / self.closed as f64)
    }
}
