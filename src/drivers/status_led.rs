//! Single-colour status LED driver.
//!
//! The LED is the board's only user-facing output.  Plain status flashes
//! and Morse text both go through this driver; whoever holds the `&mut`
//! owns the LED for the duration of the pattern.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{IndicatorError, Result};

/// Which pin level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

pub struct StatusLed<P> {
    pin: P,
    polarity: Polarity,
    lit: bool,
    flash_ms: u32,
}

impl<P: OutputPin> StatusLed<P> {
    pub fn new(pin: P, polarity: Polarity, flash_ms: u32) -> Self {
        Self {
            pin,
            polarity,
            lit: false,
            flash_ms,
        }
    }

    /// Put the LED into a known dark state.
    pub fn init(&mut self) -> Result<()> {
        self.off()
    }

    pub fn on(&mut self) -> Result<()> {
        self.set(true)
    }

    pub fn off(&mut self) -> Result<()> {
        self.set(false)
    }

    pub fn is_on(&self) -> bool {
        self.lit
    }

    /// Light the LED for `on_ms`, then keep it dark for `off_ms`.
    pub fn pulse(&mut self, delay: &mut impl DelayNs, on_ms: u32, off_ms: u32) -> Result<()> {
        self.on()?;
        delay.delay_ms(on_ms);
        self.off()?;
        delay.delay_ms(off_ms);
        Ok(())
    }

    /// `count` equal on/off flashes.  Blocks for `2 * count * flash_ms`.
    pub fn flash(&mut self, delay: &mut impl DelayNs, count: u32) -> Result<()> {
        for _ in 0..count {
            self.pulse(delay, self.flash_ms, self.flash_ms)?;
        }
        Ok(())
    }

    fn set(&mut self, lit: bool) -> Result<()> {
        let high = match self.polarity {
            Polarity::ActiveHigh => lit,
            Polarity::ActiveLow => !lit,
        };
        let res = if high { self.pin.set_high() } else { self.pin.set_low() };
        res.map_err(|_| IndicatorError::GpioWriteFailed)?;
        self.lit = lit;
        Ok(())
    }
}
