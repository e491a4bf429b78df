//! Outbound application events.
//!
//! The [`CoolboxController`](super::service::CoolboxController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them.

use crate::drivers::peltier::CoolerState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Periodic telemetry snapshot (one per tick).
    Telemetry(TelemetryData),

    /// The cooler was switched; the battery stabilisation window restarted.
    CoolerSwitched {
        state: CoolerState,
        battery_v: f32,
        temperature_c: f32,
    },

    /// Battery dropped below the cut-off.  Emitted on the edge only.
    LowBattery { battery_v: f32 },

    /// Battery recovered above the cut-off.
    BatteryRecovered { battery_v: f32 },

    /// The controller has started (carries initial cooler state).
    Started(CoolerState),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub battery_v: f32,
    pub temperature_c: f32,
    pub cooler: CoolerState,
    /// Stabilisation time left; `<= 0` means the voltage is live.
    pub settle_remaining_ms: i64,
    pub battery_low: bool,
}
