//! System configuration parameters
//!
//! All tunable parameters for the coolbox controller.  Defaults match the
//! reference hardware: a 12 V hybrid/marine battery, a ~50 W TEC module and
//! a 4:1 resistive divider feeding a 10-bit ADC.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolboxConfig {
    // --- Decision thresholds ---
    /// Open-circuit battery voltage below which the cooler is never run.
    pub battery_ok_threshold_v: f32,
    /// Coolbox temperature at or above which the cooler runs (Celsius).
    pub target_temp_c: f32,

    // --- Battery sensing ---
    /// Settle time after every cooler transition before the battery
    /// voltage is sampled again (milliseconds).
    pub stabilization_window_ms: u32,
    /// Raw ADC value at full scale.
    pub adc_full_scale: u16,
    /// Battery voltage that maps onto the ADC full scale (after the divider).
    pub battery_full_scale_v: f32,
    /// Battery internal resistance (ohms).
    pub battery_resistance_ohm: f32,
    /// Current drawn by the TEC while running (amps).
    pub peltier_current_a: f32,

    // --- Status LED / Morse ---
    /// LED on-time for a Morse dot (milliseconds).
    pub morse_dot_ms: u32,
    /// LED on-time for a Morse dash (milliseconds).
    pub morse_dash_ms: u32,
    /// LED off-time after every symbol (milliseconds).
    pub morse_symbol_gap_ms: u32,
    /// Extra LED off-time after every character of a string (milliseconds).
    pub morse_char_gap_ms: u32,
    /// On and off period of a plain status flash (milliseconds).
    pub led_flash_ms: u32,

    // --- Timing ---
    /// Control loop polling interval (milliseconds).
    pub poll_interval_ms: u32,
}

impl Default for CoolboxConfig {
    fn default() -> Self {
        Self {
            // Decision
            battery_ok_threshold_v: 12.7, // anything above is totally fine
            target_temp_c: 6.0,

            // Battery sensing
            stabilization_window_ms: 180_000, // 3 minutes
            adc_full_scale: 1023,
            battery_full_scale_v: 20.0,
            battery_resistance_ohm: 0.0625, // hybrid/marine; ~0.02 for a car starter battery
            peltier_current_a: 4.0,

            // Status LED / Morse
            morse_dot_ms: 250,
            morse_dash_ms: 500,
            morse_symbol_gap_ms: 500,
            morse_char_gap_ms: 500,
            led_flash_ms: 250,

            // Timing
            poll_interval_ms: 1000,
        }
    }
}

impl CoolboxConfig {
    /// Raw ADC counts per volt of battery voltage.
    pub fn adc_counts_per_volt(&self) -> f32 {
        self.adc_full_scale as f32 / self.battery_full_scale_v
    }

    /// Terminal voltage drop expected while the TEC is drawing current.
    pub fn expected_load_sag_v(&self) -> f32 {
        self.battery_resistance_ohm * self.peltier_current_a
    }

    /// Reject values that would make the controller misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.adc_full_scale == 0 {
            return Err(Error::Config("adc_full_scale must be non-zero"));
        }
        if !self.battery_full_scale_v.is_finite() || self.battery_full_scale_v <= 0.0 {
            return Err(Error::Config("battery_full_scale_v must be positive and finite"));
        }
        if self.stabilization_window_ms == 0 {
            return Err(Error::Config("stabilization_window_ms must be non-zero"));
        }
        if !self.battery_ok_threshold_v.is_finite() || !self.target_temp_c.is_finite() {
            return Err(Error::Config("thresholds must be finite"));
        }
        if self.morse_dot_ms == 0 || self.morse_dash_ms == 0 || self.led_flash_ms == 0 {
            return Err(Error::Config("LED on-times must be non-zero"));
        }
        if self.morse_symbol_gap_ms == 0 || self.morse_char_gap_ms == 0 {
            return Err(Error::Config("Morse gaps must be non-zero"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        Ok(())
    }
}
