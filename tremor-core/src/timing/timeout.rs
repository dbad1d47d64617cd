//! Restartable monotonic timeout
//!
//! A deadline is always computed from the clock reading at the time of
//! `restart()`, never from a previous deadline, so a late restart does not
//! shorten the next wait.

use core::task::Poll;

use crate::traits::Clock;

/// One-shot timeout
///
/// A never-armed timeout is not expired. Once armed it stays unexpired until
/// the clock reaches the deadline and then reports expired on every check
/// until the next `restart()` or `stop()`.
#[derive(Debug, Clone)]
pub struct Timeout<C> {
    clock: C,
    /// Absolute deadline, `None` while disarmed
    deadline_ms: Option<u64>,
}

impl<C: Clock> Timeout<C> {
    /// Create a disarmed timeout reading time from `clock`
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            deadline_ms: None,
        }
    }

    /// Arm the timeout to expire `duration_ms` from now
    ///
    /// Overwrites any previous arm.
    pub fn restart(&mut self, duration_ms: u32) {
        let now = self.clock.now_ms();
        self.deadline_ms = Some(now.saturating_add(u64::from(duration_ms)));
    }

    /// Disarm the timeout
    pub fn stop(&mut self) {
        self.deadline_ms = None;
    }

    /// Non-blocking expiry check
    pub fn is_expired(&self) -> bool {
        match self.deadline_ms {
            Some(deadline) => self.clock.now_ms() >= deadline,
            None => false,
        }
    }

    /// Suspend point: `Ready` once expired
    pub fn poll_expired(&self) -> Poll<()> {
        if self.is_expired() {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    struct MockClock(Cell<u64>);

    impl MockClock {
        fn at(ms: u64) -> Self {
            Self(Cell::new(ms))
        }

        fn advance(&self, ms: u64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for MockClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    #[test]
    fn test_unarmed_is_not_expired() {
        let clock = MockClock::at(0);
        let timeout = Timeout::new(&clock);
        assert!(!timeout.is_expired());
        assert_eq!(timeout.poll_expired(), Poll::Pending);
    }

    #[test]
    fn test_expires_at_deadline() {
        let clock = MockClock::at(1_000);
        let mut timeout = Timeout::new(&clock);
        timeout.restart(100);
        assert!(!timeout.is_expired());

        clock.advance(99);
        assert!(!timeout.is_expired());

        clock.advance(1);
        assert!(timeout.is_expired());
        assert_eq!(timeout.poll_expired(), Poll::Ready(()));
    }

    #[test]
    fn test_restart_is_relative_to_call_time() {
        let clock = MockClock::at(0);
        let mut timeout = Timeout::new(&clock);
        timeout.restart(50);

        // Restart late, long after the first deadline passed
        clock.advance(500);
        timeout.restart(50);
        assert!(!timeout.is_expired());

        clock.advance(49);
        assert!(!timeout.is_expired());

        clock.advance(1);
        assert!(timeout.is_expired());
    }

    #[test]
    fn test_restart_overwrites_pending_arm() {
        let clock = MockClock::at(0);
        let mut timeout = Timeout::new(&clock);
        timeout.restart(10);
        timeout.restart(100);

        clock.advance(10);
        assert!(!timeout.is_expired());

        clock.advance(90);
        assert!(timeout.is_expired());
    }

    #[test]
    fn test_stop_disarms() {
        let clock = MockClock::at(0);
        let mut timeout = Timeout::new(&clock);
        timeout.restart(10);
        clock.advance(20);
        timeout.stop();
        assert!(!timeout.is_expired());
        assert_eq!(timeout.poll_expired(), Poll::Pending);
    }

    #[test]
    fn test_no_rollover_near_counter_limit() {
        let clock = MockClock::at(u64::MAX - 5);
        let mut timeout = Timeout::new(&clock);
        timeout.restart(100);
        assert!(!timeout.is_expired());
    }

    proptest! {
        #[test]
        fn prop_expiry_is_sticky(
            start in 0u64..1_000_000_000,
            duration in 1u32..100_000,
            late in 0u64..10_000
        ) {
            let clock = MockClock::at(start);
            let mut timeout = Timeout::new(&clock);
            timeout.restart(duration);
            prop_assert!(!timeout.is_expired());

            clock.advance(u64::from(duration) + late);
            for _ in 0..3 {
                prop_assert!(timeout.is_expired());
                clock.advance(late);
            }

            timeout.restart(duration);
            prop_assert!(!timeout.is_expired());
        }
    }
}
