//! Monotonic time source for rate-limited handlers.

use std::time::{Duration, Instant};

/// A monotonic clock reporting time elapsed since some fixed origin.
///
/// Throttled handlers read time through this trait so hosts can drive them
/// from a real clock and tests can step time by hand.
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}
