//! HID report types for the gamepad interface.

pub mod gamepad;


pub use gamepad::{GamepadReport, GAMEPAD_REPORT_DESCRIPTOR, GAMEPAD_REPORT_SIZE, HAT_CENTER};
