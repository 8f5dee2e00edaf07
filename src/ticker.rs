use std::time::Duration;

/// Tick interval in milliseconds: one decrement per elapsed second
pub const TICK_MS: u64 = 1000;

/// Get tick duration for the host poll loop
pub fn tick_duration() -> Duration {
    Duration::from_millis(TICK_MS)
}

/// Handle for the repeating 1-second tick
///
/// Armed iff the timer is running; at most one pending tick exists. The
/// host loop polls [`tick_duration`] and forwards a tick only while armed,
/// so disarming before any further state mutation guarantees no tick fires
/// against a phase it no longer belongs to.
#[derive(Debug, Default)]
pub struct Ticker {
    armed: bool,
}

impl Ticker {
    pub fn new() -> Self {
        Self { armed: false }
    }

    /// Schedule the repeating tick. Idempotent.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Cancel the pending tick. Idempotent.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
