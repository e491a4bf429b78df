//! Sensor drivers: battery terminal voltage and coolbox temperature.
//!
//! Both read raw counts through the [`AnalogInput`](crate::app::ports::AnalogInput)
//! port, so the same code runs against ESP-IDF ADC channels and host mocks.

pub mod battery;
pub mod temperature;

pub use battery::VoltageSensor;
pub use temperature::NtcThermistor;
