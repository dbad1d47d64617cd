//! Monotonic time source

/// Monotonic millisecond clock
///
/// `now_ms()` must never decrease. A `u64` millisecond counter does not
/// wrap within any realistic uptime, so callers compare instants directly.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin (usually boot)
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
