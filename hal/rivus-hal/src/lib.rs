//! Rivus Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040, etc.). This enables the same control
//! logic to run on different hardware platforms - and, just as important,
//! on the host under `cargo test` with fake implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (rivus-core, firmware)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rivus-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rivus-hal-rp2040                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AdcReader`] - Analog channel sampling
//! - [`clock::MonotonicClock`] - Wrapping millisecond uptime clock

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcReader, ADC_MAX};
pub use clock::{elapsed_ms, MonotonicClock};
pub use gpio::{InputPin, OutputPin};
