//! Morse and status-flash output against a recording LED pin.

use super::mock_hw::{MockDelay, MockPin, Step, Trace, new_trace, pulses, total_wait_ms};

use coolbox::config::CoolboxConfig;
use coolbox::drivers::morse::MorseFlasher;
use coolbox::drivers::status_led::{Polarity, StatusLed};
use coolbox::error::{Error, IndicatorError};

fn rig() -> (MorseFlasher, StatusLed<MockPin>, MockDelay, Trace) {
    let config = CoolboxConfig::default();
    let trace = new_trace();
    let led = StatusLed::new(MockPin::new(&trace), Polarity::ActiveHigh, config.led_flash_ms);
    (MorseFlasher::new(&config), led, MockDelay::new(&trace), trace)
}

#[test]
fn digit_five_is_five_dots() {
    let (morse, mut led, mut delay, trace) = rig();
    morse.flash_character(&mut led, &mut delay, '5').unwrap();
    assert_eq!(pulses(&trace), vec![(250, 500); 5]);
    assert!(!led.is_on());
}

#[test]
fn digit_zero_is_five_dashes() {
    let (morse, mut led, mut delay, trace) = rig();
    morse.flash_character(&mut led, &mut delay, '0').unwrap();
    assert_eq!(pulses(&trace), vec![(500, 500); 5]);
}

#[test]
fn unknown_character_emits_nothing() {
    let (morse, mut led, mut delay, trace) = rig();
    morse.flash_character(&mut led, &mut delay, '?').unwrap();
    morse.flash_character(&mut led, &mut delay, 'e').unwrap();
    assert!(trace.borrow().is_empty());
}

#[test]
fn text_adds_gap_after_every_character() {
    let (morse, mut led, mut delay, trace) = rig();
    morse.flash_text(&mut led, &mut delay, "ET").unwrap();
    assert_eq!(
        *trace.borrow(),
        vec![
            Step::High,
            Step::Wait(250),
            Step::Low,
            Step::Wait(500),
            Step::Wait(500),
            Step::High,
            Step::Wait(500),
            Step::Low,
            Step::Wait(500),
            Step::Wait(500),
        ]
    );
}

#[test]
fn sos_pulse_pattern_and_duration() {
    let (morse, mut led, mut delay, trace) = rig();
    morse.flash_text(&mut led, &mut delay, "SOS").unwrap();

    let dot = (250, 500);
    let dash = (500, 500);
    assert_eq!(
        pulses(&trace),
        vec![dot, dot, dot, dash, dash, dash, dot, dot, dot]
    );
    assert_eq!(total_wait_ms(&trace), morse.text_duration_ms("SOS"));
}

#[test]
fn unknown_characters_in_text_still_cost_the_gap() {
    let (morse, mut led, mut delay, trace) = rig();
    morse.flash_text(&mut led, &mut delay, "?").unwrap();
    assert_eq!(*trace.borrow(), vec![Step::Wait(500)]);
}

#[test]
fn alternate_timings_from_config() {
    let config = CoolboxConfig {
        morse_dot_ms: 100,
        morse_dash_ms: 300,
        morse_symbol_gap_ms: 100,
        morse_char_gap_ms: 200,
        ..CoolboxConfig::default()
    };
    let trace = new_trace();
    let mut led = StatusLed::new(MockPin::new(&trace), Polarity::ActiveHigh, 250);
    let mut delay = MockDelay::new(&trace);
    let morse = MorseFlasher::new(&config);

    morse.flash_text(&mut led, &mut delay, "A").unwrap();
    assert_eq!(pulses(&trace), vec![(100, 100), (300, 100)]);
    assert_eq!(total_wait_ms(&trace), 800);
}

#[test]
fn status_flash_uses_even_on_off() {
    let (_, mut led, mut delay, trace) = rig();
    led.flash(&mut delay, 2).unwrap();
    assert_eq!(pulses(&trace), vec![(250, 250), (250, 250)]);
}

#[test]
fn active_low_led_drives_pin_low_to_light() {
    let trace = new_trace();
    let pin = MockPin::new(&trace);
    let level = pin.high.clone();
    let mut led = StatusLed::new(pin, Polarity::ActiveLow, 250);

    led.on().unwrap();
    assert!(!level.get());
    led.init().unwrap();
    assert!(level.get());
    assert!(!led.is_on());
}

#[test]
fn pin_failure_is_reported() {
    let trace = new_trace();
    let pin = MockPin::new(&trace);
    pin.fail.set(true);
    let mut led = StatusLed::new(pin, Polarity::ActiveHigh, 250);
    let mut delay = MockDelay::new(&trace);
    let morse = MorseFlasher::new(&CoolboxConfig::default());

    assert_eq!(
        morse.flash_character(&mut led, &mut delay, 'E'),
        Err(Error::Indicator(IndicatorError::GpioWriteFailed))
    );
    assert!(trace.borrow().is_empty());
}
