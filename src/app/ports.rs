//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CoolboxController (domain)
//! ```
//!
//! Digital outputs and delays use the `embedded-hal` 1.0 traits directly
//! (`OutputPin`, `StatefulOutputPin`, `DelayNs`).  `embedded-hal` has no
//! ADC or clock abstraction, so those seams are defined here.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Analog input (driven adapter: ADC → domain)
// ───────────────────────────────────────────────────────────────

/// A single ADC channel returning raw counts in `[0, adc_full_scale]`.
pub trait AnalogInput {
    fn read_raw(&mut self) -> u16;
}

/// Closures make convenient adapters around HAL ADC drivers.
impl<F: FnMut() -> u16> AnalogInput for F {
    fn read_raw(&mut self) -> u16 {
        self()
    }
}

// ───────────────────────────────────────────────────────────────
// Monotonic clock
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.  Only differences between readings are
/// used, so the epoch is irrelevant.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

// ───────────────────────────────────────────────────────────────
// Temperature sensor
// ───────────────────────────────────────────────────────────────

/// Coolbox interior temperature source.
pub trait Thermometer {
    /// Current temperature in degrees Celsius.
    fn read_celsius(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log today).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
