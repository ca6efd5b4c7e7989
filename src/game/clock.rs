//! Rescheduled tick deadline.
//!
//! The event loop sleeps until `deadline()`, runs one tick when `due()`
//! and then calls `reschedule()` with the game's current interval.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    deadline: Instant,
}

impl TickClock {
    /// First tick fires one `interval` after `now`
    pub fn start(now: Instant, interval: Duration) -> Self {
        Self {
            deadline: now + interval,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Schedule the next tick `interval` after `now`.
    ///
    /// Anchored on `now` rather than the old deadline so a stalled frame
    /// never causes a burst of catch-up ticks.
    pub fn reschedule(&mut self, now: Instant, interval: Duration) {
        self.deadline = now + interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_after_interval() {
        let t0 = Instant::now();
        let clock = TickClock::start(t0, Duration::from_millis(120));
        assert!(!clock.due(t0));
        assert!(!clock.due(t0 + Duration::from_millis(119)));
        assert!(clock.due(t0 + Duration::from_millis(120)));
    }

    #[test]
    fn test_reschedule_uses_new_interval() {
        let t0 = Instant::now();
        let mut clock = TickClock::start(t0, Duration::from_millis(120));
        let fired = t0 + Duration::from_millis(500);
        clock.reschedule(fired, Duration::from_millis(60));
        assert_eq!(clock.deadline(), fired + Duration::from_millis(60));
        assert!(!clock.due(fired + Duration::from_millis(59)));
    }
}
