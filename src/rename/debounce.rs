//! Time gate for preview regeneration

use std::time::{Duration, Instant};

/// Default minimum time between two preview regenerations
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Allows an action only when `interval` has passed since the last one
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a run at `now` would be allowed
    pub fn ready(&self, now: Instant) -> bool {
        self.last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Record a run at `now` if allowed; returns whether it was allowed
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.last = Some(now);
            true
        } else {
            false
        }
    }

    /// Record a forced run at `now`, bypassing the gate
    pub fn force(&mut self, now: Instant) {
        self.last = Some(now);
    }
}
