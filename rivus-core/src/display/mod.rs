//! Display control
//!
//! The programming-mode state machine decides what number the 4-digit
//! 7-segment display shows and which digits blink; the glyph table maps
//! digit values to segment sets for the renderer to drive.

pub mod controller;
pub mod glyphs;

pub use controller::{DisplayController, ProgramMode, BLINK_PERIOD_MS, NUM_DIGITS};
pub use glyphs::{glyph, Segment, Segments};
