//! Cooler on/off policy.
//!
//! Two independent thresholds:
//!
//! 1. Battery — below `battery_ok_threshold_v` the cooler is off whatever
//!    the temperature, protecting the battery from deep discharge.
//! 2. Temperature — otherwise the cooler runs while the box is at or above
//!    `target_temp_c`.
//!
//! The voltage is assumed to be the open-circuit terminal voltage; any
//! correction for load sag is the caller's job.  There is no hysteresis
//! band, so a temperature hovering at the target will cycle the cooler.

use crate::config::CoolboxConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChillerLogic {
    battery_ok_v: f32,
    target_temp_c: f32,
}

impl ChillerLogic {
    pub fn new(config: &CoolboxConfig) -> Self {
        Self {
            battery_ok_v: config.battery_ok_threshold_v,
            target_temp_c: config.target_temp_c,
        }
    }

    /// True if the cooler should be running.
    pub fn decide(&self, battery_volts: f32, coolbox_temp_c: f32) -> bool {
        if battery_volts < self.battery_ok_v {
            return false;
        }
        coolbox_temp_c >= self.target_temp_c
    }

    /// True if the battery alone forbids running the cooler.
    pub fn battery_low(&self, battery_volts: f32) -> bool {
        battery_volts < self.battery_ok_v
    }
}

impl Default for ChillerLogic {
    fn default() -> Self {
        Self::new(&CoolboxConfig::default())
    }
}
