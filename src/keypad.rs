//! GPIO keypad scanner.
//!
//! Every key is wired to its own pin, active-low with the internal
//! pull-up enabled. The scan reports a single key: the lowest-numbered
//! one that is held. No debouncing - the scan interval is slow enough
//! that a bouncing contact only costs an extra report.

use crate::traits::KeyScan;
use embedded_hal::digital::InputPin;

/// `N` direct-wired keys, key `i` on `pins[i]`.
pub struct Keypad<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> Keypad<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Release the pins.
    pub fn into_pins(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> KeyScan for Keypad<P, N> {
    fn read_key(&mut self) -> Option<u8> {
        // A pin that fails to read counts as released.
        let index = self
            .pins
            .iter_mut()
            .position(|pin| pin.is_low().unwrap_or(false))?;
        u8::try_from(index).ok()
    }
}
