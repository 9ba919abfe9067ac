//! Unified error type for pad2usb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // USB
    /// Writing the report to the HID endpoint failed.
    Usb,

    /// The USB device is not configured by the host (or the bus is unknown).
    NotConfigured,

    /// The host did not take the report in time (bus suspended).
    Timeout,

    // Tasks
    /// The executor could not spawn the gamepad task.
    TaskSpawn,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}
