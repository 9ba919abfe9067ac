//! Gamepad task startup and scheduling.
//!
//! Spawns the Embassy task that runs [`GamepadApp::poll`] every
//! [`GAMEPAD_SCAN_INTERVAL_MS`] against the hardware keypad and the USB
//! gamepad transport.

use crate::app::{self, GamepadApp, GamepadStatus};
use crate::config::{GAMEPAD_SCAN_INTERVAL_MS, GAMEPAD_USB_BUS_ID, KEY_COUNT};
use crate::error::Error;
use crate::keypad::Keypad;
use crate::usb::hid_device::{self, UsbGamepad};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Input;
use embassy_time::{Duration, Timer};

/// The board keypad: one active-low GPIO per key.
pub type BoardKeypad = Keypad<Input<'static>, KEY_COUNT>;

/// Scan loop. Each report send is bounded by `USB_SEND_TIMEOUT_MS`, so a
/// suspended bus delays a poll by at most that long.
#[embassy_executor::task]
async fn gamepad_task(
    mut keypad: BoardKeypad,
    mut transport: UsbGamepad,
    status: &'static GamepadStatus,
) -> ! {
    info!("Gamepad task started");

    let mut app = GamepadApp::new(GAMEPAD_USB_BUS_ID);

    loop {
        app.poll(&mut keypad, &mut transport).await;
        status.publish(app.buttons());

        Timer::after(Duration::from_millis(GAMEPAD_SCAN_INTERVAL_MS)).await;
    }
}

/// Start the gamepad application.
///
/// On failure the error is logged and returned; the rest of the firmware
/// keeps running without gamepad output.
pub fn start(
    spawner: &Spawner,
    keypad: BoardKeypad,
    transport: UsbGamepad,
    status: &'static GamepadStatus,
) -> Result<(), Error> {
    let spawned = spawner.spawn(gamepad_task(keypad, transport, status)).is_ok();
    app::task_started(spawned, GAMEPAD_SCAN_INTERVAL_MS)
}

/// Whether the host has configured the gamepad's USB bus.
pub fn is_ready() -> bool {
    hid_device::bus_configured(GAMEPAD_USB_BUS_ID)
}
