//! Blocking ADC access for the joystick axes

use embassy_rp::adc::{Adc, Blocking, Channel};

use rivus_hal::adc::{AdcChannel, AdcReader};

/// Reading substituted when a conversion fails: mid-scale, so a failed
/// read sits inside the centered band and cannot fake a tilt edge
const MID_SCALE: u16 = 2048;

/// Two-channel blocking ADC reader for the joystick X/Y axes
///
/// Channel handles [`JoystickAdc::X`] and [`JoystickAdc::Y`] index into
/// the channel array; the physical pins are chosen at construction.
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; 2],
}

impl<'d> JoystickAdc<'d> {
    /// Handle for the X (sideways) axis channel
    pub const X: AdcChannel = AdcChannel(0);

    /// Handle for the Y (up/down) axis channel
    pub const Y: AdcChannel = AdcChannel(1);

    /// Wrap a blocking ADC and the two axis channels
    pub fn new(adc: Adc<'d, Blocking>, x: Channel<'d>, y: Channel<'d>) -> Self {
        Self {
            adc,
            channels: [x, y],
        }
    }
}

impl AdcReader for JoystickAdc<'_> {
    fn read(&mut self, channel: AdcChannel) -> u16 {
        let Some(ch) = self.channels.get_mut(channel.index()) else {
            return MID_SCALE;
        };
        self.adc.blocking_read(ch).unwrap_or(MID_SCALE)
    }
}
