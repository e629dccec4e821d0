//! Analog channel abstractions
//!
//! The joystick axes are plain potentiometers read through the chip's ADC.
//! Channels are identified by a small integer handle so a component can
//! hold on to "which axis is mine" without owning the ADC peripheral.

/// Full-scale reading of a 12-bit conversion
pub const ADC_MAX: u16 = 4095;

/// Identifier for an analog input channel
///
/// The mapping from channel number to physical pin is owned by the
/// chip-specific `AdcReader` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel(pub u8);

impl AdcChannel {
    /// Channel number as an index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Analog sampling access
///
/// One reader serves every channel on the chip; callers pass the channel
/// handle per read. Readings are 12-bit right-aligned (`0..=ADC_MAX`).
pub trait AdcReader {
    /// Sample a channel once
    fn read(&mut self, channel: AdcChannel) -> u16;
}
