//! Display programming state machine
//!
//! Runs once per control-loop tick, after the joystick monitor. Decides
//! what number the display shows, which digits blink while editing, and
//! emits the per-digit segment set for the renderer.
//!
//! Editing is driven by joystick tilt edges, not levels: a held-over
//! stick changes a value once, on the tick where the sample leaves the
//! mid-range band.

use rivus_hal::adc::AdcReader;
use rivus_hal::clock::{elapsed_ms, MonotonicClock};

use crate::display::glyphs::{glyph, Segments};
use crate::input::{JoystickMode, JoystickMonitor};
use crate::setting::WaterSetting;

/// Digits on the display
pub const NUM_DIGITS: u8 = 4;

/// Blink toggle period while editing
pub const BLINK_PERIOD_MS: u32 = 500;

/// Tilt band: samples inside `[TILT_LOW, TILT_HIGH]` count as centered,
/// leaving the band is a tilt edge
const TILT_LOW: u16 = 10;
const TILT_HIGH: u16 = 4080;

/// Blink mask selecting the duration digits (the value-low pair)
const DURATION_MASK: u8 = 0b0011;

/// Blink mask selecting the frequency digits (the value-high pair)
const FREQUENCY_MASK: u8 = 0b1100;

/// Display programming modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramMode {
    /// Not in programming mode; the countdown is shown
    None,
    /// Editing the watering duration (lower digit pair blinking)
    Duration,
    /// Editing the watering frequency (upper digit pair blinking)
    Frequency,
}

/// Blink phase while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum BlinkPhase {
    Off,
    On,
}

/// Programming-mode state machine and digit emitter
///
/// Holds the blink timer and the double-buffered axis samples used for
/// edge detection. The axis buffers are shared by the two editing modes,
/// so a tilt held across a mode switch does not re-fire.
#[derive(Debug)]
pub struct DisplayController {
    mode: ProgramMode,
    /// Programming lockout, set by the top-level controller. While false,
    /// both this machine and the joystick are coerced back to their
    /// resting states every tick.
    programming_enabled: bool,

    blink_enabled: bool,
    blink_phase: BlinkPhase,
    /// Bit i set = digit i blinks
    blink_mask: u8,
    /// Uptime stamp of the last blink phase flip
    last_blink_toggle: u32,

    /// Number currently shown, derived each tick from the setting
    num_to_write: u16,

    /// Double-buffered 12-bit axis samples for edge detection
    prev_x: u16,
    x: u16,
    prev_y: u16,
    y: u16,
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayController {
    /// Create a controller in the resting (countdown) mode
    pub const fn new() -> Self {
        Self {
            mode: ProgramMode::None,
            programming_enabled: true,
            blink_enabled: false,
            blink_phase: BlinkPhase::On,
            blink_mask: 0,
            last_blink_toggle: 0,
            num_to_write: 0,
            prev_x: 0,
            x: 0,
            prev_y: 0,
            y: 0,
        }
    }

    /// Current programming mode
    pub fn mode(&self) -> ProgramMode {
        self.mode
    }

    /// Number the display currently shows
    pub fn num_to_write(&self) -> u16 {
        self.num_to_write
    }

    /// Whether any digit is currently set to blink
    pub fn blinking_enabled(&self) -> bool {
        self.blink_enabled
    }

    /// Allow or disallow entering programming mode
    ///
    /// Disallowing also kicks the machine (and the joystick) out of any
    /// programming state on the next tick, so a lockout can never leave
    /// the system stuck mid-edit.
    pub fn set_programming_enabled(&mut self, enabled: bool) {
        self.programming_enabled = enabled;
    }

    /// Run one display step
    ///
    /// Order matters: the blink clock advances unconditionally, the
    /// programming lockout is applied, then the current mode's handler
    /// runs (on the possibly coerced mode).
    pub fn update(
        &mut self,
        joystick: &mut JoystickMonitor,
        setting: &mut WaterSetting,
        adc: &mut impl AdcReader,
        clock: &impl MonotonicClock,
    ) {
        let now = clock.now_ms();

        // Blink clock. Same wrap policy as the joystick hold timer: a
        // wrapped counter restarts the period rather than producing a
        // bogus elapsed value.
        if now < self.last_blink_toggle {
            self.last_blink_toggle = now;
        }
        if self.blink_enabled && elapsed_ms(now, self.last_blink_toggle) >= BLINK_PERIOD_MS {
            self.blink_phase = match self.blink_phase {
                BlinkPhase::Off => BlinkPhase::On,
                BlinkPhase::On => BlinkPhase::Off,
            };
            self.last_blink_toggle = now;
        }

        // Programming lockout override, before dispatch so it takes
        // effect within the same tick.
        if !self.programming_enabled {
            self.mode = ProgramMode::None;
            self.disable_blinking();
            joystick.force_reset(now);
        }

        match self.mode {
            ProgramMode::None => self.handle_none(joystick, setting),
            ProgramMode::Duration => self.handle_duration(joystick, setting, adc, now),
            ProgramMode::Frequency => self.handle_frequency(joystick, setting, adc, now),
        }
    }

    /// Segment set to light for one digit position right now
    ///
    /// Position 0 is the least-significant digit. A masked digit in the
    /// off blink phase is blank; everything else renders its glyph.
    /// An out-of-range position is a caller defect and is asserted.
    pub fn digit_output(&self, position: u8) -> Segments {
        assert!(position < NUM_DIGITS, "digit position out of range");

        if self.blink_enabled
            && self.blink_phase == BlinkPhase::Off
            && self.blink_mask & (1 << position) != 0
        {
            return Segments::NONE;
        }

        let mut value = self.num_to_write;
        for _ in 0..position {
            value /= 10;
        }
        glyph((value % 10) as u8)
    }

    /// Countdown mode: show time until next watering, watch for the
    /// joystick committing to programming mode
    fn handle_none(&mut self, joystick: &JoystickMonitor, setting: &mut WaterSetting) {
        self.num_to_write = setting.to_number(false);

        if joystick.mode() == JoystickMode::Prog {
            self.mode = ProgramMode::Duration;
        }
    }

    /// Duration editing: lower digit pair blinks, Y tilts adjust the
    /// duration, an X tilt switches to frequency editing
    fn handle_duration(
        &mut self,
        joystick: &JoystickMonitor,
        setting: &mut WaterSetting,
        adc: &mut impl AdcReader,
        now: u32,
    ) {
        self.num_to_write = setting.to_number(true);

        if !self.blink_enabled {
            self.enable_blinking(DURATION_MASK, now);
        }
        self.blink_mask = DURATION_MASK;

        if joystick.mode() == JoystickMode::Normal {
            self.disable_blinking();
            self.mode = ProgramMode::None;
            return;
        }

        self.sample_axes(joystick, adc);

        if self.x_tilt_edge() {
            self.mode = ProgramMode::Frequency;
        } else if self.y_edge_low() {
            setting.decrement_duration();
        } else if self.y_edge_high() {
            setting.increment_duration();
        }
    }

    /// Frequency editing: symmetric to duration, upper digit pair blinks
    fn handle_frequency(
        &mut self,
        joystick: &JoystickMonitor,
        setting: &mut WaterSetting,
        adc: &mut impl AdcReader,
        now: u32,
    ) {
        self.num_to_write = setting.to_number(true);

        if !self.blink_enabled {
            self.enable_blinking(FREQUENCY_MASK, now);
        }
        self.blink_mask = FREQUENCY_MASK;

        if joystick.mode() == JoystickMode::Normal {
            self.disable_blinking();
            self.mode = ProgramMode::None;
            return;
        }

        self.sample_axes(joystick, adc);

        if self.x_tilt_edge() {
            self.mode = ProgramMode::Duration;
        } else if self.y_edge_low() {
            setting.decrement_frequency();
        } else if self.y_edge_high() {
            setting.increment_frequency();
        }
    }

    fn sample_axes(&mut self, joystick: &JoystickMonitor, adc: &mut impl AdcReader) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = adc.read(joystick.x_channel());
        self.y = adc.read(joystick.y_channel());
    }

    /// X sample left the centered band this tick, either direction
    fn x_tilt_edge(&self) -> bool {
        let was_centered = (TILT_LOW..=TILT_HIGH).contains(&self.prev_x);
        let is_tilted = self.x < TILT_LOW || self.x > TILT_HIGH;
        was_centered && is_tilted
    }

    /// Y sample crossed below the band this tick (stick pulled down)
    fn y_edge_low(&self) -> bool {
        self.y < TILT_LOW && self.prev_y >= TILT_LOW
    }

    /// Y sample crossed above the band this tick (stick pushed up)
    fn y_edge_high(&self) -> bool {
        self.y > TILT_HIGH && self.prev_y <= TILT_HIGH
    }

    /// Start blinking the masked digits
    ///
    /// The phase starts Off so the edited digits vanish immediately -
    /// instant feedback that the mode was entered.
    fn enable_blinking(&mut self, mask: u8, now: u32) {
        self.blink_mask = mask & 0b1111;
        self.blink_enabled = true;
        self.blink_phase = BlinkPhase::Off;
        self.last_blink_toggle = now;
    }

    fn disable_blinking(&mut self) {
        self.blink_mask = 0;
        self.blink_enabled = false;
    }
}
