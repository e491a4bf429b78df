//! Actuator and indicator drivers.

pub mod morse;
pub mod peltier;
pub mod status_led;
