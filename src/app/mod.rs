//! Application core — pure domain logic, zero direct I/O.
//!
//! Contains the control loop that ties battery sensing, the cooling policy
//! and the Peltier actuator together.  All interaction with hardware happens
//! through the `embedded-hal` traits and the **port traits** in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
