//! Uptime clock backed by embassy-time

use embassy_time::Instant;

use rivus_hal::clock::MonotonicClock;

/// Millisecond uptime clock
///
/// Truncates the 64-bit embassy-time instant to the u32 counter the
/// control logic runs on; the truncation is where the wrap the core's
/// overflow policies handle comes from.
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeClock;

impl MonotonicClock for UptimeClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
