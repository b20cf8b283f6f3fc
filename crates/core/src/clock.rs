//! Interval timers driven by explicit time deltas
//!
//! The session never reads a wall clock. The host calls
//! `Session::tick(delta_ms)` and each [`IntervalTimer`] converts the delta
//! into whole elapsed intervals. A cancelled timer ignores time entirely, so
//! once a session cancels its timers no further interval can fire.

/// Recurring fixed-interval timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u32,
    pending_ms: u32,
    armed: bool,
}

impl IntervalTimer {
    /// Create a disarmed timer. An interval of 0 is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            pending_ms: 0,
            armed: false,
        }
    }

    /// Start counting from zero.
    pub fn arm(&mut self) {
        self.armed = true;
        self.pending_ms = 0;
    }

    /// Stop firing and drop any partial interval.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.pending_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next firing
    pub fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    /// Advance by `delta_ms`; returns how many intervals completed.
    pub fn advance(&mut self, delta_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        let total = self.pending_ms as u64 + delta_ms as u64;
        let interval = self.interval_ms as u64;
        self.pending_ms = (total % interval) as u32;
        (total / interval) as u32
    }
}
