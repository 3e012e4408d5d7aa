//! Timestamp source injected into the conversation store.
//!
//! The store never calls `Utc::now()` directly; it asks its clock, so tests
//! can pin time and assert on exact timestamps.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

/// Source of message and conversation timestamps.
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that returns a manually advanced instant. Intended for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock pinned to the given instant.
    #[must_use]
    pub const fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance_ms(&self, ms: i64) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += chrono::Duration::milliseconds(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }
}
