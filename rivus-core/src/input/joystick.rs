//! Joystick long-press state machine
//!
//! The joystick's press-button switches the timer between showing the
//! watering countdown (normal) and editing the watering setting
//! (programming). Entering programming takes a longer hold than leaving
//! it so a stray bump does not drop the user into edit mode.

use rivus_hal::clock::{elapsed_ms, MonotonicClock};
use rivus_hal::{AdcChannel, InputPin};

/// Hold time required to enter programming mode
pub const NORMAL_TO_PROG_MS: u32 = 3000;

/// Hold time required to leave programming mode
pub const PROG_TO_NORMAL_MS: u32 = 2000;

/// Joystick modes
///
/// The two `*To*` modes are transient: any tick either advances them to
/// the target mode (threshold elapsed while held) or reverts them
/// (released early). They are never the resting mode between presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoystickMode {
    /// Showing the countdown, button idle
    Normal,
    /// Button held, waiting out the hold time towards programming
    NormalToProg,
    /// Programming mode, setting editable
    Prog,
    /// Button held, waiting out the hold time back towards normal
    ProgToNormal,
}

/// Debounced long-press monitor for the joystick select button
///
/// `update` samples the select line and performs exactly one state
/// machine step. Correctness assumes ticks come much faster than the
/// hold thresholds (tens of milliseconds apart).
#[derive(Debug)]
pub struct JoystickMonitor {
    mode: JoystickMode,
    /// Previous and current debounced button samples, inverted so that
    /// "pressed" reads true (the select line is active-low)
    prev_pressed: bool,
    pressed: bool,
    /// Uptime stamp of the last mode transition
    state_entered_at: u32,
    /// ADC channels of the two tilt axes, sampled by the display
    /// controller while editing
    x_channel: AdcChannel,
    y_channel: AdcChannel,
}

impl JoystickMonitor {
    /// Create a monitor for a joystick whose axes sit on the given ADC channels
    pub const fn new(x_channel: AdcChannel, y_channel: AdcChannel) -> Self {
        Self {
            mode: JoystickMode::Normal,
            prev_pressed: false,
            pressed: false,
            state_entered_at: 0,
            x_channel,
            y_channel,
        }
    }

    /// Current mode without stepping the machine
    pub fn mode(&self) -> JoystickMode {
        self.mode
    }

    /// ADC channel of the X (sideways) axis
    pub fn x_channel(&self) -> AdcChannel {
        self.x_channel
    }

    /// ADC channel of the Y (up/down) axis
    pub fn y_channel(&self) -> AdcChannel {
        self.y_channel
    }

    /// Sample the select line and perform one state machine step
    ///
    /// Returns the resulting mode. A press edge (previous sample released,
    /// current pressed) arms one of the transient modes; release before
    /// the hold threshold reverts, holding past it commits.
    pub fn update(&mut self, select: &impl InputPin, clock: &impl MonotonicClock) -> JoystickMode {
        let now = clock.now_ms();

        // The uptime counter wrapped since the last transition. Restart
        // the hold measurement from here rather than comparing against a
        // stamp from before the wrap; one threshold window is sacrificed.
        if now < self.state_entered_at {
            self.state_entered_at = now;
            return self.mode;
        }

        // Select line goes low when pressed; invert so pressed reads true.
        self.prev_pressed = self.pressed;
        self.pressed = select.is_low();

        let press_edge = !self.prev_pressed && self.pressed;
        let held = elapsed_ms(now, self.state_entered_at);

        match self.mode {
            JoystickMode::Normal => {
                if press_edge {
                    self.enter(JoystickMode::NormalToProg, now);
                }
            }
            JoystickMode::NormalToProg => {
                if !self.pressed {
                    self.enter(JoystickMode::Normal, now);
                } else if held >= NORMAL_TO_PROG_MS {
                    self.enter(JoystickMode::Prog, now);
                }
            }
            JoystickMode::Prog => {
                if press_edge {
                    self.enter(JoystickMode::ProgToNormal, now);
                }
            }
            JoystickMode::ProgToNormal => {
                if !self.pressed {
                    self.enter(JoystickMode::Prog, now);
                } else if held >= PROG_TO_NORMAL_MS {
                    self.enter(JoystickMode::Normal, now);
                }
            }
        }

        self.mode
    }

    /// Force the monitor back to [`JoystickMode::Normal`]
    ///
    /// Used by the display controller's programming lockout so an
    /// externally disabled edit cannot leave the joystick stuck mid-hold.
    /// Takes `now` so the entry stamp stays fresh like any transition.
    pub fn force_reset(&mut self, now: u32) {
        self.enter(JoystickMode::Normal, now);
    }

    /// Milliseconds since the current mode was entered
    ///
    /// Unlike `update`, this computes across a counter wrap so the value
    /// stays monotonically sensible for display purposes.
    pub fn time_since_state_entered(&self, clock: &impl MonotonicClock) -> u32 {
        elapsed_ms(clock.now_ms(), self.state_entered_at)
    }

    fn enter(&mut self, mode: JoystickMode, now: u32) {
        self.mode = mode;
        self.state_entered_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Clock that reports whatever the test last stored
    struct FakeClock(core::cell::Cell<u32>);

    impl FakeClock {
        fn new(start: u32) -> Self {
            Self(core::cell::Cell::new(start))
        }
        fn set(&self, now: u32) {
            self.0.set(now);
        }
    }

    impl MonotonicClock for FakeClock {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    /// Select line double; `pressed` drives the active-low level
    struct FakeSelect(core::cell::Cell<bool>);

    impl FakeSelect {
        fn released() -> Self {
            Self(core::cell::Cell::new(false))
        }
        fn set_pressed(&self, pressed: bool) {
            self.0.set(pressed);
        }
    }

    impl InputPin for FakeSelect {
        fn is_high(&self) -> bool {
            // Active-low button: pressed pulls the line low
            !self.0.get()
        }
    }

    fn monitor() -> JoystickMonitor {
        JoystickMonitor::new(AdcChannel(0), AdcChannel(1))
    }

    #[test]
    fn test_press_edge_arms_transition() {
        let mut joystick = monitor();
        let clock = FakeClock::new(1000);
        let select = FakeSelect::released();

        assert_eq!(joystick.update(&select, &clock), JoystickMode::Normal);

        select.set_pressed(true);
        clock.set(1010);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::NormalToProg);
    }

    #[test]
    fn test_short_hold_reverts_to_normal() {
        let mut joystick = monitor();
        let clock = FakeClock::new(0);
        let select = FakeSelect::released();

        joystick.update(&select, &clock);
        select.set_pressed(true);
        joystick.update(&select, &clock);

        // Released 1s in, well under the 3s threshold
        clock.set(1000);
        select.set_pressed(false);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::Normal);
    }

    #[test]
    fn test_long_hold_enters_prog() {
        let mut joystick = monitor();
        let clock = FakeClock::new(0);
        let select = FakeSelect::released();

        joystick.update(&select, &clock);
        select.set_pressed(true);
        joystick.update(&select, &clock);

        clock.set(NORMAL_TO_PROG_MS - 1);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::NormalToProg);

        clock.set(NORMAL_TO_PROG_MS);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::Prog);
    }

    #[test]
    fn test_leaving_prog_uses_shorter_threshold() {
        let mut joystick = monitor();
        let clock = FakeClock::new(0);
        let select = FakeSelect::released();

        // Get into Prog
        joystick.update(&select, &clock);
        select.set_pressed(true);
        joystick.update(&select, &clock);
        clock.set(NORMAL_TO_PROG_MS);
        joystick.update(&select, &clock);
        assert_eq!(joystick.mode(), JoystickMode::Prog);

        // Release, then press again and hold for the shorter threshold
        select.set_pressed(false);
        clock.set(NORMAL_TO_PROG_MS + 100);
        joystick.update(&select, &clock);

        select.set_pressed(true);
        clock.set(NORMAL_TO_PROG_MS + 200);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::ProgToNormal);

        clock.set(NORMAL_TO_PROG_MS + 200 + PROG_TO_NORMAL_MS);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::Normal);
    }

    #[test]
    fn test_early_release_stays_in_prog() {
        let mut joystick = monitor();
        let clock = FakeClock::new(0);
        let select = FakeSelect::released();

        joystick.update(&select, &clock);
        select.set_pressed(true);
        joystick.update(&select, &clock);
        clock.set(NORMAL_TO_PROG_MS);
        joystick.update(&select, &clock);

        // New press, released before the 2s threshold
        select.set_pressed(false);
        clock.set(4000);
        joystick.update(&select, &clock);
        select.set_pressed(true);
        clock.set(4100);
        joystick.update(&select, &clock);
        select.set_pressed(false);
        clock.set(4500);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::Prog);
    }

    #[test]
    fn test_wrap_resets_measurement_window() {
        let mut joystick = monitor();
        let clock = FakeClock::new(u32::MAX - 10);
        let select = FakeSelect::released();

        joystick.update(&select, &clock);
        select.set_pressed(true);
        joystick.update(&select, &clock);
        assert_eq!(joystick.mode(), JoystickMode::NormalToProg);

        // Counter wraps. The tick must neither panic nor commit a bogus
        // "held for 4 billion ms" transition; the stamp restarts at now.
        clock.set(5);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::NormalToProg);

        // Still held: the threshold now counts from after the wrap
        clock.set(5 + NORMAL_TO_PROG_MS);
        assert_eq!(joystick.update(&select, &clock), JoystickMode::Prog);
    }

    #[test]
    fn test_time_since_state_entered_across_wrap() {
        let mut joystick = monitor();
        let clock = FakeClock::new(u32::MAX - 100);
        let select = FakeSelect::released();

        select.set_pressed(true);
        // Normal has no press history yet, so the first update arms the
        // transition and stamps the entry time near the top of the counter
        joystick.update(&select, &clock);

        clock.set(50);
        let elapsed = joystick.time_since_state_entered(&clock);
        assert_eq!(elapsed, 150);
    }

    #[test]
    fn test_force_reset() {
        let mut joystick = monitor();
        let clock = FakeClock::new(0);
        let select = FakeSelect::released();

        joystick.update(&select, &clock);
        select.set_pressed(true);
        joystick.update(&select, &clock);
        clock.set(NORMAL_TO_PROG_MS);
        joystick.update(&select, &clock);
        assert_eq!(joystick.mode(), JoystickMode::Prog);

        joystick.force_reset(clock.now_ms());
        assert_eq!(joystick.mode(), JoystickMode::Normal);
        assert_eq!(joystick.time_since_state_entered(&clock), 0);
    }

    proptest! {
        /// No release-before-threshold sequence ever leaves the machine
        /// resting in a transient mode: after a tick with the button
        /// released, the mode is Normal or Prog.
        #[test]
        fn prop_transients_never_rest_released(
            samples in proptest::collection::vec(any::<bool>(), 1..100),
        ) {
            let mut joystick = monitor();
            let clock = FakeClock::new(0);
            let select = FakeSelect::released();

            let mut now = 0u32;
            for pressed in samples {
                // 10ms ticks, far below both hold thresholds
                now += 10;
                clock.set(now);
                select.set_pressed(pressed);
                let mode = joystick.update(&select, &clock);
                if !pressed {
                    prop_assert!(
                        mode == JoystickMode::Normal || mode == JoystickMode::Prog
                    );
                }
            }
        }
    }
}
