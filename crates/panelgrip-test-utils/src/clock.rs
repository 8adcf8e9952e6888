use std::sync::Arc;
use std::time::Duration;

use panelgrip_core::Clock;
use parking_lot::Mutex;

/// A clock that starts at zero and advances only on request.
///
/// Clones share the same time, so a test can keep one copy and hand another
/// to the code under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Jump to an absolute time.
    pub fn set(&self, to: Duration) {
        *self.now.lock() = to;
    }

    /// This clock as a shareable trait object.
    pub fn shared(&self) -> Arc<dyn Clock> {
        Arc::new(self.clone())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::new();
        let shared = clock.shared();
        assert_eq!(shared.now(), Duration::ZERO);

        clock.advance_ms(40);
        clock.advance(Duration::from_millis(2));
        assert_eq!(shared.now(), Duration::from_millis(42));

        clock.set(Duration::from_secs(1));
        assert_eq!(shared.now(), Duration::from_secs(1));
    }
}
