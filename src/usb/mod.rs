//! USB Device subsystem - presents a HID gamepad to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. The device exposes one HID interface carrying the
//! 9-byte gamepad report from [`crate::hid::gamepad`].
//!
//! The gamepad task writes reports through `hid_device::UsbGamepad`,
//! which implements [`crate::traits::GamepadTransport`]. Link state
//! bookkeeping lives in [`link`] and builds on the host.

#[cfg(feature = "embedded")]
pub mod hid_device;
pub mod link;
