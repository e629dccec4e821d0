//! Joystick input handling
//!
//! Turns raw select-button samples into the normal/programming mode
//! signal the display controller runs on. The state machine is explicit,
//! finite, and deterministic; it is stepped once per control-loop tick.

pub mod joystick;

pub use joystick::{JoystickMode, JoystickMonitor, NORMAL_TO_PROG_MS, PROG_TO_NORMAL_MS};
