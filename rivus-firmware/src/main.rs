//! Rivus - Irrigation Timer Firmware
//!
//! Main firmware binary for RP2040-based irrigation timers: a joystick
//! with a press-button, a bare 4-digit 7-segment display, and a valve
//! output. Short glances show the countdown to the next watering; a
//! long press on the stick enters programming mode where tilting edits
//! the watering frequency (days) and duration (seconds).
//!
//! Named after the Latin "rivus" (irrigation channel).

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::Pull;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use rivus_core::display::{DisplayController, ProgramMode};
use rivus_core::input::JoystickMonitor;
use rivus_core::setting::WaterSetting;
use rivus_hal_rp2040::{DigitalInput, DigitalOutput, JoystickAdc, UptimeClock};

use crate::scheduler::WateringScheduler;
use crate::sevenseg::SevenSeg;

mod scheduler;
mod sevenseg;

/// Control loop tick interval
///
/// Doubles as the digit multiplex rate (one digit per tick, 50Hz per
/// digit across four) and must stay far below the 2s/3s hold thresholds.
const TICK_INTERVAL_MS: u64 = 5;

/// Factory defaults: water every 3 days, 30 seconds at a time
const DEFAULT_FREQUENCY_DAYS: u16 = 3;
const DEFAULT_DURATION_S: u16 = 30;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Rivus firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Joystick: select button on GPIO22 (active-low, pulled up),
    // axes on the two ADC pins GPIO26/GPIO27
    let select = DigitalInput::new(p.PIN_22.into(), Pull::Up);
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let x_axis = Channel::new_pin(p.PIN_26, Pull::None);
    let y_axis = Channel::new_pin(p.PIN_27, Pull::None);
    let mut adc = JoystickAdc::new(adc, x_axis, y_axis);

    // 7-segment module: digit selects on GPIO2-5 (least-significant digit
    // first), segments A-G on GPIO6-12
    let digit_pins = [
        DigitalOutput::new(p.PIN_2.into()),
        DigitalOutput::new(p.PIN_3.into()),
        DigitalOutput::new(p.PIN_4.into()),
        DigitalOutput::new(p.PIN_5.into()),
    ];
    let segment_pins = [
        DigitalOutput::new(p.PIN_6.into()),
        DigitalOutput::new(p.PIN_7.into()),
        DigitalOutput::new(p.PIN_8.into()),
        DigitalOutput::new(p.PIN_9.into()),
        DigitalOutput::new(p.PIN_10.into()),
        DigitalOutput::new(p.PIN_11.into()),
        DigitalOutput::new(p.PIN_12.into()),
    ];
    let mut display_pins = SevenSeg::new(digit_pins, segment_pins);

    // Valve driver on GPIO21
    let mut valve = DigitalOutput::new(p.PIN_21.into());

    let clock = UptimeClock;
    let mut joystick = JoystickMonitor::new(JoystickAdc::X, JoystickAdc::Y);
    let mut display = DisplayController::new();
    let mut setting = WaterSetting::new(DEFAULT_FREQUENCY_DAYS, DEFAULT_DURATION_S);
    let mut water = WateringScheduler::new(&setting);

    info!(
        "Entering control loop: every {} days for {} seconds",
        setting.frequency, setting.duration
    );

    let mut last_mode = display.mode();
    let mut was_watering = false;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        // One tick: joystick step, then display step, then the slow parts
        joystick.update(&select, &clock);
        display.update(&mut joystick, &mut setting, &mut adc, &clock);

        let editing = display.mode() != ProgramMode::None;
        water.step(
            TICK_INTERVAL_MS as f32 / 1000.0,
            &mut setting,
            &mut valve,
            editing,
        );

        display_pins.refresh(&display);

        if display.mode() != last_mode {
            last_mode = display.mode();
            info!("display mode: {}", last_mode);
            if !editing {
                info!(
                    "setting now: every {} days for {} seconds",
                    setting.frequency, setting.duration
                );
            }
        }
        if water.watering() != was_watering {
            was_watering = water.watering();
            info!("valve {}", if was_watering { "open" } else { "closed" });
        }
    }
}
