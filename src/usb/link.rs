//! USB link state as seen by the device stack callbacks.
//!
//! Kept free of hardware types so the bookkeeping runs on the host.

use crate::config::GAMEPAD_USB_BUS_ID;
use crate::traits::UsbBusId;
use core::sync::atomic::{AtomicBool, Ordering};

/// Whether a report can go out on `bus` given the configured flag.
///
/// Only [`GAMEPAD_USB_BUS_ID`] exists; any other bus is never configured.
pub fn bus_configured_with(configured: bool, bus: UsbBusId) -> bool {
    configured && bus == GAMEPAD_USB_BUS_ID
}

/// Configured flag, updated from `embassy_usb::Handler` callbacks.
pub struct UsbLinkState {
    configured: AtomicBool,
}

impl UsbLinkState {
    pub const fn new() -> Self {
        Self {
            configured: AtomicBool::new(false),
        }
    }

    /// Bus reset: the host has to configure us again.
    pub fn on_reset(&self) {
        self.configured.store(false, Ordering::Release);
    }

    /// Peripheral enabled/disabled. Disabling happens on VBUS removal,
    /// which is not followed by a reset or deconfigure.
    pub fn on_enabled(&self, enabled: bool) {
        if !enabled {
            self.configured.store(false, Ordering::Release);
        }
    }

    pub fn on_configured(&self, configured: bool) {
        self.configured.store(configured, Ordering::Release);
    }

    pub fn is_configured(&self, bus: UsbBusId) -> bool {
        bus_configured_with(self.configured.load(Ordering::Acquire), bus)
    }
}

impl Default for UsbLinkState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUS: UsbBusId = GAMEPAD_USB_BUS_ID;

    #[test]
    fn only_the_gamepad_bus_can_be_configured() {
        assert!(bus_configured_with(true, BUS));
        assert!(!bus_configured_with(false, BUS));
        assert!(!bus_configured_with(true, BUS + 1));
        assert!(!bus_configured_with(true, 0xFF));
    }

    #[test]
    fn starts_unconfigured() {
        let link = UsbLinkState::new();
        assert!(!link.is_configured(BUS));
    }

    #[test]
    fn configured_then_deconfigured() {
        let link = UsbLinkState::new();
        link.on_configured(true);
        assert!(link.is_configured(BUS));
        assert!(!link.is_configured(BUS + 1));
        link.on_configured(false);
        assert!(!link.is_configured(BUS));
    }

    #[test]
    fn power_removed_clears_configured() {
        let link = UsbLinkState::new();
        link.on_enabled(true);
        link.on_configured(true);
        // Cable pulled: the stack only reports the peripheral as disabled.
        link.on_enabled(false);
        assert!(!link.is_configured(BUS));
    }

    #[test]
    fn enabling_does_not_imply_configured() {
        let link = UsbLinkState::new();
        link.on_enabled(true);
        assert!(!link.is_configured(BUS));
    }

    #[test]
    fn bus_reset_clears_configured() {
        let link = UsbLinkState::new();
        link.on_configured(true);
        link.on_reset();
        assert!(!link.is_configured(BUS));
    }
}
