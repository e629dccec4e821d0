//! RP2040-specific HAL for the irrigation timer firmware
//!
//! This crate provides RP2040 implementations of the shared `rivus-hal`
//! traits on top of embassy-rp:
//!
//! - GPIO input/output wrappers (select button, digit/segment/valve pins)
//! - Blocking ADC access for the joystick axes
//! - Uptime clock (implements `rivus_hal::MonotonicClock`)

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;

pub use adc::JoystickAdc;
pub use clock::UptimeClock;
pub use gpio::{DigitalInput, DigitalOutput};
