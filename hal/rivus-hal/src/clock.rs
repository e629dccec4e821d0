//! Monotonic millisecond clock
//!
//! The control logic keeps its timestamps as a free-running `u32`
//! millisecond counter. The counter wraps to zero after `u32::MAX`
//! (about 49.7 days of uptime), so every consumer of a stored timestamp
//! has to decide what a wrap means for it - see [`elapsed_ms`] and the
//! state machines in `rivus-core` for the two policies in use.

/// Free-running millisecond uptime clock
///
/// Readings are monotonic between wraps; a wrap shows up as the reading
/// jumping below a previously stored one.
pub trait MonotonicClock {
    /// Current uptime in milliseconds, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;
}

/// Milliseconds elapsed from `since` to `now`, computed across a wrap
///
/// When the counter has wrapped (`now < since`), the elapsed time is the
/// distance from `since` to the top of the counter plus the distance from
/// zero to `now`. The result is always sensible for display purposes,
/// never negative or absurdly large.
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    if now < since {
        (u32::MAX - since) + now
    } else {
        now - since
    }
}
