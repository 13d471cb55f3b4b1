//! Interval timing for the strike phase.
//!
//! Time never comes from the OS here. The scheduling loop owns the clock and
//! passes a monotonic millisecond value into every query, so the same code
//! runs under a wall clock, a hardware tick counter, or a test advancing time
//! by hand.

/// Monotonic milliseconds supplied by the scheduling loop.
pub type Millis = u64;

/// One-shot interval timer in the polling style: arm it with `reset`, then
/// ask `has_elapsed` once per scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: Millis,
    origin: Millis,
}

impl IntervalTimer {
    /// Create a timer with the given interval, armed at time zero.
    pub fn new(interval: Millis) -> Self {
        Self {
            interval,
            origin: 0,
        }
    }

    /// Change the interval without rearming.
    pub fn configure(&mut self, interval: Millis) {
        self.interval = interval;
    }

    /// Rearm: the interval is measured from `now` onward.
    pub fn reset(&mut self, now: Millis) {
        self.origin = now;
    }

    /// True once the configured interval has passed since the last `reset`.
    ///
    /// Pure check; never blocks. A `now` earlier than the arm point (caller
    /// handed in non-monotonic time) reads as not-yet-elapsed.
    #[inline]
    pub fn has_elapsed(&self, now: Millis) -> bool {
        now.saturating_sub(self.origin) >= self.interval
    }

    /// The configured interval.
    pub fn interval(&self) -> Millis {
        self.interval
    }
}
