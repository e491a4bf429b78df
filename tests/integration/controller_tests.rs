//! Integration tests for the VoltageSensor → ChillerLogic → Peltier loop.
//!
//! Time is simulated with [`MockClock`]; every tick advances it explicitly.

use core::cell::Cell;
use std::rc::Rc;

use super::mock_hw::{MockAdc, MockClock, MockPin, MockThermometer, RecordingSink, new_trace};

use coolbox::app::events::AppEvent;
use coolbox::app::ports::AnalogInput;
use coolbox::app::service::CoolboxController;
use coolbox::config::CoolboxConfig;
use coolbox::drivers::peltier::{CoolerState, PeltierDriver};
use coolbox::error::{ActuatorError, Error};
use coolbox::sensors::VoltageSensor;

struct Handles {
    adc: MockAdc,
    clock: MockClock,
    thermometer: MockThermometer,
    sink: RecordingSink,
    pin_high: Rc<Cell<bool>>,
    pin_fail: Rc<Cell<bool>>,
}

fn rig(
    volts: f32,
    celsius: f32,
) -> (
    CoolboxController<impl AnalogInput, MockClock, MockPin>,
    Handles,
) {
    let config = CoolboxConfig::default();
    let adc = MockAdc::default();
    adc.set_volts(volts);
    let clock = MockClock::default();
    let pin = MockPin::new(&new_trace());
    let pin_high = pin.high.clone();
    let pin_fail = pin.fail.clone();

    let battery = VoltageSensor::new(adc.input(), clock.clone(), &config);
    let mut controller = CoolboxController::new(battery, PeltierDriver::new(pin), &config);
    let mut sink = RecordingSink::new();
    controller.start(&mut sink).unwrap();

    let handles = Handles {
        adc,
        clock,
        thermometer: MockThermometer::new(celsius),
        sink,
        pin_high,
        pin_fail,
    };
    (controller, handles)
}

fn switched(e: &AppEvent) -> bool {
    matches!(e, AppEvent::CoolerSwitched { .. })
}

#[test]
fn start_forces_cooler_off() {
    let (controller, h) = rig(13.0, 10.0);
    assert_eq!(controller.cooler_state(), CoolerState::Off);
    assert!(!h.pin_high.get());
    assert_eq!(h.sink.events, vec![AppEvent::Started(CoolerState::Off)]);
}

#[test]
fn warm_box_with_good_battery_starts_cooling() {
    let (mut controller, mut h) = rig(13.0, 10.0);

    let report = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();

    assert!(report.switched);
    assert_eq!(report.cooler, CoolerState::On);
    assert!(h.pin_high.get());
    assert_eq!(h.sink.count(switched), 1);
}

#[test]
fn switch_restarts_window_before_any_further_read() {
    let (mut controller, mut h) = rig(13.0, 10.0);
    controller.tick(&mut h.thermometer, &mut h.sink).unwrap();

    assert_eq!(h.adc.reads.get(), 1);
    assert!(controller.battery().is_settling());
    assert_eq!(controller.battery().remaining_ms(), 180_000);
}

#[test]
fn voltage_sag_during_window_is_ignored() {
    let (mut controller, mut h) = rig(13.0, 10.0);
    controller.tick(&mut h.thermometer, &mut h.sink).unwrap();

    // Load sag that would trip the cut-off if it were sampled.
    h.adc.set_volts(12.5);
    for _ in 0..10 {
        h.clock.advance(1_000);
        let report = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
        assert!((report.battery_v - 13.0).abs() < 0.01);
        assert_eq!(report.cooler, CoolerState::On);
    }
    assert_eq!(h.adc.reads.get(), 1, "ADC must not be sampled while settling");
    assert_eq!(controller.battery().remaining_ms(), 170_000);
}

#[test]
fn fresh_sample_after_window_expires() {
    let (mut controller, mut h) = rig(13.0, 10.0);
    controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    h.adc.set_volts(12.5);

    for _ in 0..2 {
        h.clock.advance(60_000);
        controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    }
    assert_eq!(controller.cooler_state(), CoolerState::On);
    assert_eq!(h.adc.reads.get(), 1);

    h.clock.advance(60_000);
    let report = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();

    assert_eq!(h.adc.reads.get(), 2);
    assert!(report.battery_low);
    assert!(report.switched);
    assert_eq!(report.cooler, CoolerState::Off);
    assert!(!h.pin_high.get());
    assert_eq!(controller.battery().remaining_ms(), 180_000);
}

#[test]
fn cooler_stops_below_target_and_holds_at_target() {
    let (mut controller, mut h) = rig(13.0, 6.0);
    assert!(controller.tick(&mut h.thermometer, &mut h.sink).unwrap().switched);

    // Exactly at target keeps running.
    h.clock.advance(1_000);
    let r = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    assert!(!r.switched);
    assert_eq!(r.cooler, CoolerState::On);

    h.thermometer.set(5.9);
    h.clock.advance(1_000);
    let r = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    assert!(r.switched);
    assert_eq!(r.cooler, CoolerState::Off);
    assert_eq!(h.sink.count(switched), 2);
}

#[test]
fn temperature_jitter_cycles_cooler_every_tick() {
    let (mut controller, mut h) = rig(13.0, 6.0);
    let temps = [6.0, 5.9, 6.0, 5.9];
    for t in temps {
        h.thermometer.set(t);
        h.clock.advance(1_000);
        assert!(controller.tick(&mut h.thermometer, &mut h.sink).unwrap().switched);
    }
    assert_eq!(h.sink.count(switched), temps.len());
}

#[test]
fn low_battery_reported_on_edges_only() {
    let (mut controller, mut h) = rig(12.0, 10.0);

    for _ in 0..3 {
        h.clock.advance(1_000);
        let r = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
        assert!(r.battery_low);
        assert_eq!(r.cooler, CoolerState::Off);
    }
    assert_eq!(
        h.sink.count(|e| matches!(e, AppEvent::LowBattery { .. })),
        1
    );
    assert_eq!(h.sink.count(switched), 0);

    h.adc.set_volts(13.0);
    h.clock.advance(1_000);
    let r = controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    assert!(!r.battery_low);
    assert!(r.switched);
    assert_eq!(
        h.sink.count(|e| matches!(e, AppEvent::BatteryRecovered { .. })),
        1
    );
}

#[test]
fn telemetry_emitted_every_tick() {
    let (mut controller, mut h) = rig(13.0, 3.0);
    for _ in 0..5 {
        h.clock.advance(1_000);
        controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    }
    assert_eq!(
        h.sink.count(|e| matches!(e, AppEvent::Telemetry(_))),
        5
    );
    assert_eq!(controller.tick_count(), 5);
}

#[test]
fn failed_pin_write_keeps_state_and_window() {
    let (mut controller, mut h) = rig(13.0, 10.0);
    h.pin_fail.set(true);

    let err = controller.tick(&mut h.thermometer, &mut h.sink).unwrap_err();
    assert_eq!(err, Error::Actuator(ActuatorError::GpioWriteFailed));
    assert_eq!(controller.cooler_state(), CoolerState::Off);
    assert!(!controller.battery().is_settling());
    assert_eq!(h.sink.count(switched), 0);

    h.pin_fail.set(false);
    h.clock.advance(1_000);
    assert!(controller.tick(&mut h.thermometer, &mut h.sink).unwrap().switched);
}

#[test]
fn irregular_ticks_count_wall_clock_not_calls() {
    let (mut controller, mut h) = rig(13.0, 10.0);
    controller.tick(&mut h.thermometer, &mut h.sink).unwrap();

    // One long blocking status pattern followed by short ticks.
    h.clock.advance(7_250);
    controller.tick(&mut h.thermometer, &mut h.sink).unwrap();
    h.clock.advance(1_000);
    controller.tick(&mut h.thermometer, &mut h.sink).unwrap();

    assert_eq!(controller.battery().remaining_ms(), 180_000 - 8_250);
}
