//! Board-agnostic control logic for the irrigation timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Watering setting model (frequency/duration, display encoding)
//! - Joystick long-press state machine (normal vs programming mode)
//! - Display controller state machine (editing, blinking, digit output)
//!
//! One control-loop tick is `JoystickMonitor::update` followed by
//! `DisplayController::update`; everything here is stepped, never blocked.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod setting;
