//! pad2usb - keypad to USB HID gamepad.
//!
//! The pure logic (key → button mask, report layout, the poll step and
//! the keypad scan) builds on the host and is unit tested there:
//!
//! `cargo test`
//!
//! The hardware side (`usb::hid_device`, `gamepad_task`) only builds with the
//! `embedded` feature for the nRF52840 target, together with `main.rs`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod error;
pub mod hid;
pub mod keypad;
pub mod traits;

pub mod usb;

#[cfg(feature = "embedded")]
pub mod gamepad_task;

pub use app::{buttons_for_key, is_ready, task_started, GamepadApp, GamepadStatus, PollOutcome};
pub use error::Error;
pub use hid::GamepadReport;
pub use traits::{GamepadTransport, KeyScan, UsbBusId};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
