//! Seams between the gamepad task and the drivers it composes.
//!
//! The task never touches hardware directly: it reads keys through
//! [`KeyScan`] and hands reports to a [`GamepadTransport`], so both sides
//! can be replaced by fakes in host tests.

use crate::error::Error;
use crate::hid::GamepadReport;
use core::future::Future;

/// Identifier of a USB bus (controller instance).
pub type UsbBusId = u8;

/// Source of the currently pressed key.
pub trait KeyScan {
    /// Index of the pressed key, or `None` when no key is pressed.
    fn read_key(&mut self) -> Option<u8>;
}

/// USB HID transport that owns the gamepad report buffer.
pub trait GamepadTransport {
    /// Report buffer that the next [`send_report`](Self::send_report) transmits.
    fn report_mut(&mut self) -> &mut GamepadReport;

    /// Whether the host has enumerated and configured the device on `bus`.
    fn is_configured(&self, bus: UsbBusId) -> bool;

    /// Transmit the current report buffer on `bus`.
    fn send_report(&mut self, bus: UsbBusId) -> impl Future<Output = Result<(), Error>>;
}
