//! Monotonic clock sources for lap timing
//!
//! Lap durations are computed from a monotonic clock so that wall-clock
//! adjustments (NTP slew, manual changes) can never produce negative or
//! inflated readings.

use std::cell::Cell;
use std::time::Instant;

/// Nanosecond-resolution monotonic clock source
pub trait Clock {
    /// Current reading in nanoseconds since the clock's origin
    fn now_ns(&self) -> u64;
}

impl<T: Clock> Clock for &T {
    fn now_ns(&self) -> u64 {
        (*self).now_ns()
    }
}

/// Monotonic clock anchored to an `Instant` captured at construction
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock anchored at the current instant
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Deterministic clock for tests, advanced manually
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a manual clock starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `ns` nanoseconds
    pub fn advance(&self, ns: u64) {
        self.now.set(self.now.get() + ns);
    }

    /// Set the clock to an absolute reading
    pub fn set(&self, ns: u64) {
        self.now.set(ns);
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.get()
    }
}
