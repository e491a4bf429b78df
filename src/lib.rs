//! Coolbox firmware library.
//!
//! A battery-powered thermoelectric cooler: the controller reads the
//! open-circuit battery voltage, holds the reading steady for a few minutes
//! after every cooler transition, and switches a Peltier module on or off
//! from the battery and coolbox temperature thresholds.  A single status
//! LED reports state, including Morse-coded text.
//!
//! Everything except the ESP-IDF binary (`main.rs`) builds and tests on the
//! host.  Hardware is reached only through `embedded-hal` traits and the
//! ports in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
