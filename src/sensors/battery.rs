//! Battery terminal-voltage sensor with post-transition stabilisation.
//!
//! The battery is read through an external 4:1 divider so that 0–20 V
//! lands in the ADC input range.  Switching the TEC on or off moves the
//! terminal voltage by roughly `R_internal * I_peltier` and the battery
//! takes minutes to settle, so after every transition the reading is
//! frozen for a fixed window.
//!
//! The window is a countdown decremented by the wall-clock time between
//! successive [`VoltageSensor::update_timer`] calls, not an absolute
//! deadline.  A reset simply restarts the countdown.

use log::debug;

use crate::app::ports::{AnalogInput, Clock};
use crate::config::CoolboxConfig;

pub struct VoltageSensor<A, C> {
    adc: A,
    clock: C,
    counts_per_volt: f32,
    window_ms: i64,
    /// Signed: one update may overshoot past zero.  `<= 0` means expired.
    remaining_ms: i64,
    stable_volts: f32,
    last_tick_ms: u64,
}

impl<A: AnalogInput, C: Clock> VoltageSensor<A, C> {
    /// The countdown starts expired, so the first read samples the ADC.
    pub fn new(adc: A, clock: C, config: &CoolboxConfig) -> Self {
        let last_tick_ms = clock.now_ms();
        Self {
            adc,
            clock,
            counts_per_volt: config.adc_counts_per_volt(),
            window_ms: i64::from(config.stabilization_window_ms),
            remaining_ms: 0,
            stable_volts: 0.0,
            last_tick_ms,
        }
    }

    /// Convert a raw ADC sample into battery volts.
    pub fn raw_to_voltage(&self, raw: u16) -> f32 {
        raw as f32 / self.counts_per_volt
    }

    /// Most recent settled battery voltage.
    ///
    /// While the stabilisation window is running the ADC is not touched and
    /// the previous reading is returned unchanged.
    pub fn get_voltage(&mut self) -> f32 {
        if !self.is_settling() {
            let raw = self.adc.read_raw();
            self.stable_volts = self.raw_to_voltage(raw);
            debug!("battery: raw={} -> {:.2} V", raw, self.stable_volts);
        }
        self.stable_volts
    }

    /// Advance the countdown by the time elapsed since the previous call.
    /// Must be called exactly once per polling tick.
    pub fn update_timer(&mut self) {
        let now = self.clock.now_ms();
        let elapsed = now.wrapping_sub(self.last_tick_ms);
        self.last_tick_ms = now;

        if self.remaining_ms > 0 {
            debug!(
                "battery stabilisation timer has {} ms to run",
                self.remaining_ms
            );
            let elapsed = i64::try_from(elapsed).unwrap_or(i64::MAX);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
        }
    }

    /// Restart the stabilisation window.  Call on every cooler transition.
    pub fn reset_timer(&mut self) {
        self.remaining_ms = self.window_ms;
    }

    /// True while readings are being suppressed.
    pub fn is_settling(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Remaining stabilisation time; zero or negative once expired.
    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    /// The last accepted reading, without touching the ADC.
    pub fn last_voltage(&self) -> f32 {
        self.stable_volts
    }
}
