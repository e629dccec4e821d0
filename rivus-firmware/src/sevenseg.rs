//! Multiplexed 7-segment display driver
//!
//! The display is a bare 4-digit common-cathode module: 4 digit-select
//! pins and 7 segment pins, no driver chip. Only one digit is lit at a
//! time; calling [`SevenSeg::refresh`] fast enough (every few
//! milliseconds) makes all four appear steady.

use rivus_core::display::{DisplayController, Segment, NUM_DIGITS};
use rivus_hal::OutputPin;

/// Pin driver for the multiplexed display
pub struct SevenSeg<P: OutputPin> {
    digits: [P; NUM_DIGITS as usize],
    segments: [P; 7],
    /// Digit position lit on the next refresh
    cursor: u8,
}

impl<P: OutputPin> SevenSeg<P> {
    pub fn new(digits: [P; NUM_DIGITS as usize], segments: [P; 7]) -> Self {
        Self {
            digits,
            segments,
            cursor: 0,
        }
    }

    /// Wipe out what is currently on the display
    pub fn clear(&mut self) {
        for digit in &mut self.digits {
            digit.set_low();
        }
        for segment in &mut self.segments {
            segment.set_low();
        }
    }

    /// Light the next digit in rotation with the controller's decision
    pub fn refresh(&mut self, controller: &DisplayController) {
        let position = self.cursor;
        self.cursor = (self.cursor + 1) % NUM_DIGITS;

        let glyph = controller.digit_output(position);

        self.clear();
        self.digits[position as usize].set_high();
        for (pin, segment) in self.segments.iter_mut().zip(Segment::ALL) {
            pin.set_state(glyph.contains(segment));
        }
    }
}
