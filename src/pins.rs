//! GPIO / peripheral pin assignments for the coolbox controller board
//! (ESP32-S3).
//!
//! Output pins are claimed by number from here.  The ADC inputs are typed
//! `Peripherals` fields in esp-idf-hal, so `main` takes `gpio4`/`gpio5`
//! directly; keep the numbers below in sync with those fields.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Battery terminal voltage through the external 4:1 divider.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const BATTERY_ADC_GPIO: i32 = 4;

/// Coolbox NTC thermistor divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 5;

/// Full-scale count of the ESP32-S3 ADC (12-bit).
pub const ADC_FULL_SCALE: u16 = 4095;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Digital output: Peltier MOSFET gate (active HIGH).
pub const PELTIER_GPIO: i32 = 6;

/// Digital output: status LED (active HIGH).
pub const STATUS_LED_GPIO: i32 = 7;
