//! Gamepad polling logic - key index → button mask → HID report.
//!
//! One call to [`GamepadApp::poll`] is one iteration of the scan loop.
//! A report only goes out when the key index differs from the previous
//! poll, so holding a key produces a single report.

use crate::error::Error;
use crate::hid::GamepadReport;
use crate::traits::{GamepadTransport, KeyScan, UsbBusId};
use core::sync::atomic::{AtomicU16, Ordering};

/// Number of buttons the report's mask can carry.
pub const BUTTON_COUNT: u8 = 16;

/// Result of a single poll iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Key index unchanged since the previous poll; nothing was touched.
    Unchanged,
    /// Report transmitted.
    Sent,
    /// Report updated, but the device is not configured so nothing was sent.
    NotConfigured,
    /// The transport rejected the report. Not retried.
    SendFailed,
}

/// Map a key index to its button mask.
///
/// Key `k` sets bit `k`. No key, or an index the 16-bit mask cannot hold,
/// yields an empty mask.
pub fn buttons_for_key(key: Option<u8>) -> u16 {
    match key {
        Some(k) => 1u16.checked_shl(u32::from(k)).unwrap_or(0),
        None => 0,
    }
}

/// Whether the gamepad can currently deliver reports on `bus`.
pub fn is_ready<T: GamepadTransport>(transport: &T, bus: UsbBusId) -> bool {
    transport.is_configured(bus)
}

/// Log and classify the outcome of spawning the polling task.
///
/// A failed spawn leaves the firmware running without gamepad output.
pub fn task_started(spawned: bool, scan_interval_ms: u64) -> Result<(), Error> {
    if !spawned {
        error!("Failed to create gamepad task");
        return Err(Error::TaskSpawn);
    }

    info!(
        "Application started (scan interval: {}ms)",
        scan_interval_ms
    );
    Ok(())
}

/// State of the polling task.
pub struct GamepadApp {
    bus: UsbBusId,
    last_key: Option<u8>,
    buttons: u16,
}

impl GamepadApp {
    /// Fresh state: no key seen yet, no buttons pressed.
    pub const fn new(bus: UsbBusId) -> Self {
        Self {
            bus,
            last_key: None,
            buttons: 0,
        }
    }

    /// Button mask computed by the most recent key change.
    pub fn buttons(&self) -> u16 {
        self.buttons
    }

    /// Key index observed by the most recent poll.
    pub fn last_key(&self) -> Option<u8> {
        self.last_key
    }

    /// Bus the reports are sent on.
    pub fn bus(&self) -> UsbBusId {
        self.bus
    }

    /// Run one scan iteration.
    pub async fn poll<K, T>(&mut self, keys: &mut K, transport: &mut T) -> PollOutcome
    where
        K: KeyScan,
        T: GamepadTransport,
    {
        let key = keys.read_key();
        if key == self.last_key {
            return PollOutcome::Unchanged;
        }

        self.buttons = buttons_for_key(key);
        if let Some(k) = key {
            if k >= BUTTON_COUNT {
                warn!("Key {} has no gamepad button", k);
            }
        }

        let report: &mut GamepadReport = transport.report_mut();
        report.apply_buttons(self.buttons);

        let outcome = if transport.is_configured(self.bus) {
            match transport.send_report(self.bus).await {
                Ok(()) => {
                    match key {
                        Some(k) => info!("Button {} pressed (bit {})", k, k),
                        None => info!("All buttons released"),
                    }
                    PollOutcome::Sent
                }
                Err(_) => PollOutcome::SendFailed,
            }
        } else {
            PollOutcome::NotConfigured
        };

        self.last_key = key;
        outcome
    }
}

/// Snapshot of the last computed button mask, readable from any task.
///
/// The polling task is the only writer.
pub struct GamepadStatus {
    buttons: AtomicU16,
}

impl GamepadStatus {
    pub const fn new() -> Self {
        Self {
            buttons: AtomicU16::new(0),
        }
    }

    /// Store the mask computed by the polling task.
    pub fn publish(&self, buttons: u16) {
        self.buttons.store(buttons, Ordering::Relaxed);
    }

    /// Last published button mask.
    pub fn buttons(&self) -> u16 {
        self.buttons.load(Ordering::Relaxed)
    }
}

impl Default for GamepadStatus {
    fn default() -> Self {
        Self::new()
    }
}
