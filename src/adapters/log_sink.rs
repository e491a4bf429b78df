//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (ESP-IDF logger → UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | batt={:.2}V{} | T={:.1}\u{00b0}C | cooler={:?} | settle={}ms",
                    t.battery_v,
                    if t.battery_low { " LOW" } else { "" },
                    t.temperature_c,
                    t.cooler,
                    t.settle_remaining_ms.max(0),
                );
            }
            AppEvent::CoolerSwitched {
                state,
                battery_v,
                temperature_c,
            } => {
                info!(
                    "COOLER | {:?} | batt={:.2}V T={:.1}\u{00b0}C",
                    state, battery_v, temperature_c
                );
            }
            AppEvent::LowBattery { battery_v } => {
                warn!("BATTERY | low {:.2}V", battery_v);
            }
            AppEvent::BatteryRecovered { battery_v } => {
                info!("BATTERY | recovered {:.2}V", battery_v);
            }
            AppEvent::Started(state) => {
                info!("START | cooler={:?}", state);
            }
        }
    }
}
