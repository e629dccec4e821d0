//! Watering scheduler
//!
//! Owns the long-term countdown the display shows in normal mode and
//! pulses the valve when it expires. Stepped from the control loop;
//! frozen while the user is editing so a changed setting takes effect
//! cleanly on the next re-arm.

use rivus_core::setting::WaterSetting;
use rivus_hal::OutputPin;

const SECONDS_PER_DAY: f32 = 86_400.0;

/// Countdown and valve control
pub struct WateringScheduler {
    /// Seconds until the valve next opens
    countdown_s: f32,
    /// Seconds of watering left; zero when the valve is closed
    watering_left_s: f32,
}

impl WateringScheduler {
    /// Arm the countdown from the current setting
    pub fn new(setting: &WaterSetting) -> Self {
        Self {
            countdown_s: interval_s(setting),
            watering_left_s: 0.0,
        }
    }

    /// Advance by `dt_s` seconds of wall time
    ///
    /// While `editing` is set the countdown holds and the valve stays
    /// shut - an edit mid-watering aborts the watering. The setting's
    /// `time_until_next_watering` is refreshed every step for the
    /// display to render.
    pub fn step(
        &mut self,
        dt_s: f32,
        setting: &mut WaterSetting,
        valve: &mut impl OutputPin,
        editing: bool,
    ) {
        if editing {
            valve.set_low();
            self.watering_left_s = 0.0;
            setting.time_until_next_watering = self.countdown_s.max(0.0);
            return;
        }

        self.countdown_s -= dt_s;
        if self.countdown_s <= 0.0 {
            valve.set_high();
            self.watering_left_s = setting.duration as f32;
            self.countdown_s = interval_s(setting);
        }

        if self.watering_left_s > 0.0 {
            self.watering_left_s -= dt_s;
            if self.watering_left_s <= 0.0 {
                self.watering_left_s = 0.0;
                valve.set_low();
            }
        }

        setting.time_until_next_watering = self.countdown_s.max(0.0);
    }

    /// Whether the valve is currently being held open
    pub fn watering(&self) -> bool {
        self.watering_left_s > 0.0
    }
}

fn interval_s(setting: &WaterSetting) -> f32 {
    setting.frequency as f32 * SECONDS_PER_DAY
}
