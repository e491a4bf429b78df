//! Coolbox firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  ADC closures     PinDriver        Esp32TimeAdapter  FreeRtos│
//! │  (AnalogInput)    (OutputPin)      (Clock)           (Delay) │
//! │                                                              │
//! │  ─────────────── Port / embedded-hal boundary ───────────    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │           CoolboxController (pure logic)               │  │
//! │  │  VoltageSensor · ChillerLogic · PeltierDriver          │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                                                              │
//! │  StatusLed · MorseFlasher (status reporting between ticks)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::adc::attenuation::DB_11;
use esp_idf_hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyOutputPin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info, warn};

use coolbox::adapters::log_sink::LogEventSink;
use coolbox::adapters::time::Esp32TimeAdapter;
use coolbox::app::service::CoolboxController;
use coolbox::config::CoolboxConfig;
use coolbox::drivers::morse::MorseFlasher;
use coolbox::drivers::peltier::PeltierDriver;
use coolbox::drivers::status_led::{Polarity, StatusLed};
use coolbox::pins;
use coolbox::sensors::{NtcThermistor, VoltageSensor};

/// Blinked while the battery is below the cut-off.
const LOW_BATTERY_MORSE: &str = "LB";
/// Flashes signalling a failed Peltier write.
const FAULT_FLASHES: u32 = 5;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Coolbox v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = CoolboxConfig {
        adc_full_scale: pins::ADC_FULL_SCALE,
        ..CoolboxConfig::default()
    };
    config.validate()?;
    info!(
        "config: cut-off {:.2} V, target {:.1} C, settle {} ms, load sag ~{:.2} V",
        config.battery_ok_threshold_v,
        config.target_temp_c,
        config.stabilization_window_ms,
        config.expected_load_sag_v(),
    );

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    let adc = AdcDriver::new(peripherals.adc1)?;
    let chan_cfg = AdcChannelConfig {
        attenuation: DB_11,
        ..Default::default()
    };
    // Typed pins; must match pins::BATTERY_ADC_GPIO / TEMP_ADC_GPIO.
    let mut battery_chan = AdcChannelDriver::new(&adc, peripherals.pins.gpio4, &chan_cfg)?;
    let mut temp_chan = AdcChannelDriver::new(&adc, peripherals.pins.gpio5, &chan_cfg)?;
    info!(
        "ADC: battery GPIO{}, temperature GPIO{}",
        pins::BATTERY_ADC_GPIO,
        pins::TEMP_ADC_GPIO
    );

    let adc = &adc;
    let battery_adc = move || {
        adc.read(&mut battery_chan).unwrap_or_else(|e| {
            warn!("battery ADC read failed: {}", e);
            0
        })
    };
    let temp_adc = move || {
        adc.read(&mut temp_chan).unwrap_or_else(|e| {
            warn!("temperature ADC read failed: {}", e);
            0
        })
    };

    // SAFETY: the pin numbers come from `pins` and are not claimed by any
    // other driver in this firmware.
    let peltier_pin = PinDriver::output(unsafe { AnyOutputPin::new(pins::PELTIER_GPIO) })?;
    let led_pin = PinDriver::output(unsafe { AnyOutputPin::new(pins::STATUS_LED_GPIO) })?;

    // ── 4. Domain objects ─────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let battery = VoltageSensor::new(battery_adc, &clock, &config);
    let mut thermometer = NtcThermistor::new(temp_adc, config.adc_full_scale);
    let mut controller = CoolboxController::new(battery, PeltierDriver::new(peltier_pin), &config);

    let mut led = StatusLed::new(led_pin, Polarity::ActiveHigh, config.led_flash_ms);
    led.init()?;
    let morse = MorseFlasher::new(&config);
    let mut delay = FreeRtos;
    let mut sink = LogEventSink::new();

    controller.start(&mut sink)?;

    // ── 5. Polling loop ───────────────────────────────────────
    //
    // Status output blocks between ticks; the stabilisation countdown is
    // driven by wall-clock deltas so the irregular tick length is absorbed.
    loop {
        match controller.tick(&mut thermometer, &mut sink) {
            Ok(report) if report.battery_low => {
                morse.flash_text(&mut led, &mut delay, LOW_BATTERY_MORSE)?;
            }
            Ok(_) => led.flash(&mut delay, 1)?,
            Err(e) => {
                error!("control tick failed: {}", e);
                led.flash(&mut delay, FAULT_FLASHES)?;
            }
        }
        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
