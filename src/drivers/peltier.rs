//! Peltier TEC driver (logic-level MOSFET on a single GPIO).
//!
//! Hard on/off only: HIGH = cooling, LOW = off.
//!
//! ## Safety contract
//!
//! Every transition disturbs the battery terminal voltage.  The driver is
//! a dumb actuator; re-arming the battery stabilisation window is done by
//! the controller that owns both this driver and the voltage sensor.

use embedded_hal::digital::StatefulOutputPin;
use log::info;

use crate::error::{ActuatorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolerState {
    Off,
    On,
}

impl CoolerState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    fn flipped(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl From<bool> for CoolerState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

pub struct PeltierDriver<P> {
    pin: P,
    state: CoolerState,
}

impl<P: StatefulOutputPin> PeltierDriver<P> {
    /// Take ownership of the output pin.  The commanded state is seeded
    /// from the pin's current level; call [`init`](Self::init) to force
    /// a known state.
    pub fn new(mut pin: P) -> Self {
        let state = CoolerState::from(pin.is_set_high().unwrap_or(false));
        Self { pin, state }
    }

    /// Force the cooler off.  Idempotent.
    pub fn init(&mut self) -> Result<()> {
        self.drive(CoolerState::Off)
    }

    /// Last commanded level.
    pub fn current_state(&self) -> CoolerState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Flip the output and return the new state.
    pub fn toggle(&mut self) -> Result<CoolerState> {
        let next = self.state.flipped();
        self.drive(next)?;
        info!("peltier: {:?} -> {:?}", next.flipped(), next);
        Ok(next)
    }

    fn drive(&mut self, state: CoolerState) -> Result<()> {
        let res = match state {
            CoolerState::On => self.pin.set_high(),
            CoolerState::Off => self.pin.set_low(),
        };
        res.map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.state = state;
        Ok(())
    }
}
