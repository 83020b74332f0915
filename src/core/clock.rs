//! Time sources for match kick-off times.
//!
//! The registry never reads the system time directly; it asks an injected
//! [`Clock`]. Production code uses [`SystemClock`], replays and tests use
//! [`FixedClock`] or [`SteppingClock`] to get reproducible start times.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reports `start`, then advances by `step` on every call.
///
/// Each kick-off therefore gets a strictly later time than the previous one,
/// until the clock saturates at the latest representable instant.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self
            .next
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let current = *next;
        *next = current
            .checked_add_signed(self.step)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        current
    }
}
