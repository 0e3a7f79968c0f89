//! Millisecond tick source backed by `embassy-time`
//!
//! The embassy time driver keeps the counter running from a hardware
//! timer; the scheduler only ever reads it.

use embassy_time::Instant;
use tally_hal::TickSource;

/// Tick source reading the embassy uptime clock
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTick;

impl EmbassyTick {
    /// Create the tick source
    pub const fn new() -> Self {
        Self
    }
}

impl TickSource for EmbassyTick {
    fn now_ms(&self) -> u32 {
        // Truncation wraps every ~49 days; the scheduler compares with
        // wrapping subtraction
        Instant::now().as_millis() as u32
    }
}
