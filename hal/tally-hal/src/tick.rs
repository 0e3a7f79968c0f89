//! Millisecond tick source
//!
//! The scheduler reads the tick exactly once per loop iteration and only
//! ever compares two readings with [`elapsed`], so a 32-bit counter that
//! wraps after ~49 days is fine.

/// Monotonic millisecond counter
///
/// Must not block. The counter is maintained outside the scheduler (a
/// hardware timer on the target, a plain field in tests).
pub trait TickSource {
    /// Current tick in milliseconds
    fn now_ms(&self) -> u32;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Ticks elapsed from `since` to `now`, correct across wraparound
#[inline]
pub const fn elapsed(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_simple() {
        assert_eq!(elapsed(305, 5), 300);
        assert_eq!(elapsed(7, 7), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        assert_eq!(elapsed(4, u32::MAX - 5), 10);
    }
}
