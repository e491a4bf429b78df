//! Morse code output on the status LED.
//!
//! ## Timing
//!
//! | Element                     | LED | Default |
//! |-----------------------------|-----|---------|
//! | Dot                         | on  | 250 ms  |
//! | Dash                        | on  | 500 ms  |
//! | After every symbol          | off | 500 ms  |
//! | After every character       | off | +500 ms |
//!
//! The character gap is also emitted after the last character of a string.
//! Only `A`–`Z` and `0`–`9` are encoded (case-sensitive); anything else
//! produces no output at all.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::FnvIndexMap;

use crate::config::CoolboxConfig;
use crate::drivers::status_led::StatusLed;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

const TABLE_CAP: usize = 64;

const MORSE_TABLE: [(char, &str); 36] = [
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
];

pub struct MorseFlasher {
    table: FnvIndexMap<char, &'static str, TABLE_CAP>,
    dot_ms: u32,
    dash_ms: u32,
    symbol_gap_ms: u32,
    char_gap_ms: u32,
}

impl MorseFlasher {
    pub fn new(config: &CoolboxConfig) -> Self {
        Self {
            table: MORSE_TABLE.into_iter().collect(),
            dot_ms: config.morse_dot_ms,
            dash_ms: config.morse_dash_ms,
            symbol_gap_ms: config.morse_symbol_gap_ms,
            char_gap_ms: config.morse_char_gap_ms,
        }
    }

    /// Symbols for `c`, empty if `c` has no encoding.
    pub fn encode(&self, c: char) -> impl Iterator<Item = Symbol> + '_ {
        self.table
            .get(&c)
            .copied()
            .unwrap_or("")
            .chars()
            .map(|s| if s == '.' { Symbol::Dot } else { Symbol::Dash })
    }

    pub fn is_encodable(&self, c: char) -> bool {
        self.table.contains_key(&c)
    }

    /// LED on-time for one symbol.
    pub fn symbol_ms(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::Dot => self.dot_ms,
            Symbol::Dash => self.dash_ms,
        }
    }

    /// Blink one character.  Unknown characters return immediately.
    pub fn flash_character<P: OutputPin>(
        &self,
        led: &mut StatusLed<P>,
        delay: &mut impl DelayNs,
        c: char,
    ) -> Result<()> {
        for symbol in self.encode(c) {
            led.pulse(delay, self.symbol_ms(symbol), self.symbol_gap_ms)?;
        }
        Ok(())
    }

    /// Blink every character of `text` in order, with a character gap after each.
    pub fn flash_text<P: OutputPin>(
        &self,
        led: &mut StatusLed<P>,
        delay: &mut impl DelayNs,
        text: &str,
    ) -> Result<()> {
        for c in text.chars() {
            self.flash_character(led, delay, c)?;
            delay.delay_ms(self.char_gap_ms);
        }
        Ok(())
    }

    /// Total time [`flash_text`](Self::flash_text) blocks for.
    pub fn text_duration_ms(&self, text: &str) -> u64 {
        text.chars()
            .map(|c| {
                let symbols: u64 = self
                    .encode(c)
                    .map(|s| u64::from(self.symbol_ms(s)) + u64::from(self.symbol_gap_ms))
                    .sum();
                symbols + u64::from(self.char_gap_ms)
            })
            .sum()
    }
}
