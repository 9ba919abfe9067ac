//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Gamepad task

/// Interval between two key scans (ms).
pub const GAMEPAD_SCAN_INTERVAL_MS: u64 = 10;

/// Identifier of the USB bus the gamepad interface lives on.
/// The nRF52840 has a single USBD peripheral, so this is always 0.
pub const GAMEPAD_USB_BUS_ID: u8 = 0;

// Keypad

/// Number of keys on the keypad. One logical gamepad button per key.
pub const KEY_COUNT: usize = 16;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "pad2usb";
pub const USB_PRODUCT: &str = "Keypad USB Gamepad";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// Longest wait for the host to take a report (ms). A suspended bus
/// would otherwise hold the scan loop until resume.
pub const USB_SEND_TIMEOUT_MS: u64 = 50;

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

/// Current drawn from VBUS (mA).
pub const USB_MAX_POWER_MA: u16 = 100;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Keys are active-low with the internal pull-up enabled. Key N maps to
// logical button N, i.e. bit N of the report's button mask (HID usage
// Button N+1).
//
//   Key 0..3   → P0.11, P0.12, P0.24, P0.25 (DK buttons 1-4)
//   Key 4..9   → P0.03, P0.04, P0.28, P0.29, P0.30, P0.31
//   Key 10..15 → P1.01, P1.02, P1.03, P1.04, P1.05, P1.06
//
// The concrete `embassy_nrf::peripherals::*` pins are picked in `main.rs`.
