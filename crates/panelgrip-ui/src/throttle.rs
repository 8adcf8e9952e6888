//! Leading-edge throttle gate.
//!
//! The first call in a window passes and opens the window; calls before the
//! window elapses are dropped outright. Nothing is queued and no trailing
//! call is replayed, so the last event of a burst may be lost.

use std::time::Duration;

/// Window used by the viewport reactor.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Duration>,
    dropped: u64,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            dropped: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` if a call at `now` may run, and records it as fired.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        let open = match self.last_fired {
            None => true,
            // A clock that went backwards counts as elapsed.
            Some(last) => now.checked_sub(last).is_none_or(|e| e >= self.interval),
        };
        if open {
            self.last_fired = Some(now);
        } else {
            self.dropped += 1;
        }
        open
    }

    /// Number of calls dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_call_passes_then_window_drops() {
        let mut throttle = Throttle::default();
        assert!(throttle.try_fire(ms(1000)));
        assert!(!throttle.try_fire(ms(1050)));
        assert!(!throttle.try_fire(ms(1099)));
        assert!(throttle.try_fire(ms(1100)));
        assert_eq!(throttle.dropped(), 2);
    }

    #[test]
    fn test_dropped_calls_do_not_extend_window() {
        let mut throttle = Throttle::new(ms(100));
        assert!(throttle.try_fire(ms(0)));
        assert!(!throttle.try_fire(ms(90)));
        // Window is measured from the last call that passed, not the last call.
        assert!(throttle.try_fire(ms(100)));
    }

    #[test]
    fn test_backwards_clock_reopens_window() {
        let mut throttle = Throttle::new(ms(100));
        assert!(throttle.try_fire(ms(500)));
        assert!(throttle.try_fire(ms(10)));
        assert!(!throttle.try_fire(ms(11)));
        assert_eq!(throttle.dropped(), 1);
    }
}
