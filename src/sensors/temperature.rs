//! NTC thermistor in the coolbox (10 kOhm @ 25 C, B = 3950).
//!
//! Wired as the low side of a voltage divider with a fixed 10 kOhm
//! resistor.  Only the ratio of the reading to full scale matters, so the
//! ADC reference voltage drops out.  The simplified Beta (Steinhart-Hart)
//! equation converts resistance to temperature.

use crate::app::ports::{AnalogInput, Thermometer};

const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;

/// Reported for a shorted or open thermistor.
pub const SENSOR_FAULT_C: f32 = -40.0;

pub struct NtcThermistor<A> {
    adc: A,
    adc_max: f32,
}

impl<A: AnalogInput> NtcThermistor<A> {
    pub fn new(adc: A, adc_full_scale: u16) -> Self {
        Self {
            adc,
            adc_max: adc_full_scale as f32,
        }
    }

    pub fn raw_to_celsius(&self, raw: u16) -> f32 {
        let ratio = raw as f32 / self.adc_max;
        if ratio <= 0.003 || ratio >= 0.997 {
            return SENSOR_FAULT_C;
        }
        let r_ntc = R_DIVIDER * ratio / (1.0 - ratio);
        let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
        if inv_t <= 0.0 {
            return SENSOR_FAULT_C;
        }
        (1.0 / inv_t) - 273.15
    }
}

impl<A: AnalogInput> Thermometer for NtcThermistor<A> {
    fn read_celsius(&mut self) -> f32 {
        let raw = self.adc.read_raw();
        self.raw_to_celsius(raw)
    }
}
