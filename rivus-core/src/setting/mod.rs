//! Watering setting model
//!
//! Holds what the user can program (how often and how long to water) and
//! encodes it - or the countdown to the next watering - as a 4-digit
//! number for the display. No time or state awareness lives here.

/// Lower bound for frequency and duration once programmed
pub const MIN_SETTING: u16 = 1;

/// Upper bound for frequency and duration (two display digits each)
pub const MAX_SETTING: u16 = 99;

/// The programmable watering setting
///
/// `frequency` is days between waterings, `duration` is seconds of
/// watering. Both are mutated only through the saturating increment and
/// decrement operations, so they never leave `[MIN_SETTING, MAX_SETTING]`
/// once inside it. `time_until_next_watering` is owned by the watering
/// scheduler; this model only reads it and clamps it before rendering.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaterSetting {
    /// How often to water (days)
    pub frequency: u16,
    /// How long to water (seconds)
    pub duration: u16,
    /// Seconds until next watering, updated by the scheduler
    pub time_until_next_watering: f32,
}

impl Default for WaterSetting {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl WaterSetting {
    /// Create a setting with explicit frequency and duration
    pub const fn new(frequency: u16, duration: u16) -> Self {
        Self {
            frequency,
            duration,
            time_until_next_watering: 0.0,
        }
    }

    /// Decrement duration, saturating at the lower bound
    pub fn decrement_duration(&mut self) {
        if self.duration > MIN_SETTING {
            self.duration -= 1;
        }
    }

    /// Increment duration, saturating at the upper bound
    pub fn increment_duration(&mut self) {
        if self.duration < MAX_SETTING {
            self.duration += 1;
        }
    }

    /// Decrement frequency, saturating at the lower bound
    pub fn decrement_frequency(&mut self) {
        if self.frequency > MIN_SETTING {
            self.frequency -= 1;
        }
    }

    /// Increment frequency, saturating at the upper bound
    pub fn increment_frequency(&mut self) {
        if self.frequency < MAX_SETTING {
            self.frequency += 1;
        }
    }

    /// Encode the setting as a 4-digit display number
    ///
    /// With `editing` set, the upper two digits show frequency (days) and
    /// the lower two show duration (seconds). Otherwise the countdown to
    /// the next watering is shown as minutes/seconds, each pair capped at
    /// 99. Both fields are re-clamped here as a mutator should already
    /// have bounded them.
    pub fn to_number(&mut self, editing: bool) -> u16 {
        if editing {
            self.frequency = self.frequency.min(MAX_SETTING);
            self.duration = self.duration.min(MAX_SETTING);
            self.frequency * 100 + self.duration
        } else {
            // Minutes/seconds until the next watering. Meant to become
            // days/hours once waterings are actually days apart.
            self.time_until_next_watering = self.time_until_next_watering.max(0.0);

            let total_s = self.time_until_next_watering as i32;
            let minutes = (total_s / 60).min(MAX_SETTING as i32) as u16;
            let seconds = (total_s - minutes as i32 * 60).min(MAX_SETTING as i32) as u16;
            minutes * 100 + seconds
        }
    }
}
