//! Control loop service — the hexagonal core.
//!
//! [`CoolboxController`] owns the battery voltage sensor and the Peltier
//! driver together.  Owning both is what lets every cooler transition and
//! the matching restart of the stabilisation window happen as a single
//! step, with no voltage read in between.
//!
//! ```text
//!  AnalogInput ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!  Clock       ──▶ │    CoolboxController     │
//!  Thermometer ──▶ │ VoltageSensor · Chiller  │ ──▶ Peltier pin
//!                  └──────────────────────────┘
//! ```
//!
//! ## Tick order
//!
//! 1. advance the stabilisation countdown (always, exactly once)
//! 2. read the (possibly frozen) battery voltage
//! 3. read the coolbox temperature
//! 4. decide; if the decision differs from the commanded state, toggle
//!    the cooler and restart the window

use embedded_hal::digital::StatefulOutputPin;
use log::{info, warn};

use crate::config::CoolboxConfig;
use crate::control::chiller::ChillerLogic;
use crate::drivers::peltier::{CoolerState, PeltierDriver};
use crate::error::Result;
use crate::sensors::battery::VoltageSensor;

use super::events::{AppEvent, TelemetryData};
use super::ports::{AnalogInput, Clock, EventSink, Thermometer};

/// Outcome of one control tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub battery_v: f32,
    pub temperature_c: f32,
    pub cooler: CoolerState,
    /// True if the cooler changed state during this tick.
    pub switched: bool,
    pub battery_low: bool,
}

pub struct CoolboxController<A, C, P> {
    battery: VoltageSensor<A, C>,
    peltier: PeltierDriver<P>,
    logic: ChillerLogic,
    battery_low: bool,
    tick_count: u64,
}

impl<A, C, P> CoolboxController<A, C, P>
where
    A: AnalogInput,
    C: Clock,
    P: StatefulOutputPin,
{
    pub fn new(
        battery: VoltageSensor<A, C>,
        peltier: PeltierDriver<P>,
        config: &CoolboxConfig,
    ) -> Self {
        Self {
            battery,
            peltier,
            logic: ChillerLogic::new(config),
            battery_low: false,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force the cooler off and announce the start.
    pub fn start(&mut self, sink: &mut impl EventSink) -> Result<()> {
        self.peltier.init()?;
        sink.emit(&AppEvent::Started(self.peltier.current_state()));
        info!("controller started, cooler {:?}", self.peltier.current_state());
        Ok(())
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle.  Only a failed Peltier pin write is an error.
    pub fn tick(
        &mut self,
        thermometer: &mut impl Thermometer,
        sink: &mut impl EventSink,
    ) -> Result<TickReport> {
        self.tick_count += 1;

        self.battery.update_timer();
        let battery_v = self.battery.get_voltage();
        let temperature_c = thermometer.read_celsius();

        self.track_battery(battery_v, sink);

        let want_on = self.logic.decide(battery_v, temperature_c);
        let switched = want_on != self.peltier.is_on();
        if switched {
            let state = self.switch_cooler()?;
            sink.emit(&AppEvent::CoolerSwitched {
                state,
                battery_v,
                temperature_c,
            });
        }

        let report = TickReport {
            battery_v,
            temperature_c,
            cooler: self.peltier.current_state(),
            switched,
            battery_low: self.battery_low,
        };
        sink.emit(&AppEvent::Telemetry(TelemetryData {
            battery_v,
            temperature_c,
            cooler: report.cooler,
            settle_remaining_ms: self.battery.remaining_ms(),
            battery_low: self.battery_low,
        }));
        Ok(report)
    }

    /// Toggle the cooler and restart the stabilisation window.  This is
    /// the only path that changes the Peltier output after start-up.
    fn switch_cooler(&mut self) -> Result<CoolerState> {
        let state = self.peltier.toggle()?;
        self.battery.reset_timer();
        info!("battery stabilisation window restarted");
        Ok(state)
    }

    fn track_battery(&mut self, battery_v: f32, sink: &mut impl EventSink) {
        let low = self.logic.battery_low(battery_v);
        if low == self.battery_low {
            return;
        }
        self.battery_low = low;
        if low {
            warn!("battery low ({:.2} V), cooler held off", battery_v);
            sink.emit(&AppEvent::LowBattery { battery_v });
        } else {
            info!("battery recovered ({:.2} V)", battery_v);
            sink.emit(&AppEvent::BatteryRecovered { battery_v });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn cooler_state(&self) -> CoolerState {
        self.peltier.current_state()
    }

    pub fn battery(&self) -> &VoltageSensor<A, C> {
        &self.battery
    }

    pub fn is_battery_low(&self) -> bool {
        self.battery_low
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
