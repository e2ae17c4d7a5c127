//! Wall-clock source for session timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of the current time as floating-point seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// A clock that only moves when told to. Used by tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    pub fn new(epoch_secs: f64) -> Self {
        Self {
            millis: AtomicU64::new((epoch_secs * 1000.0) as u64),
        }
    }

    pub fn advance(&self, secs: f64) {
        self.millis
            .fetch_add((secs * 1000.0) as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.millis.load(Ordering::SeqCst) as f64 / 1000.0
    }
}
