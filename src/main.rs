//! pad2usb firmware entry point (nRF52840).
//!
//! Brings up the USB gamepad device, wires the 16-key GPIO keypad and
//! starts the gamepad task. If the task cannot be started the firmware
//! keeps the USB device alive but sends no reports.

#![no_std]
#![no_main]

use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::pac;
use pad2usb::gamepad_task::{self, BoardKeypad};
use pad2usb::keypad::Keypad;
use pad2usb::usb::hid_device::{self, UsbDriverDevice};
use pad2usb::GamepadStatus;
use panic_probe as _;
use static_cell::StaticCell;

static GAMEPAD_STATUS: StaticCell<GamepadStatus> = StaticCell::new();

#[embassy_executor::task]
async fn usb_task(device: UsbDriverDevice) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pad2usb starting");

    // USBD needs the external high-frequency crystal.
    pac::CLOCK.tasks_hfclkstart().write_value(1);
    while pac::CLOCK.events_hfclkstarted().read() != 1 {}

    let usb = hid_device::init(p.USBD);
    if spawner.spawn(usb_task(usb.device)).is_err() {
        warn!("Failed to start USB device task");
    }

    let keypad: BoardKeypad = Keypad::new([
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
        Input::new(p.P0_25, Pull::Up),
        Input::new(p.P0_03, Pull::Up),
        Input::new(p.P0_04, Pull::Up),
        Input::new(p.P0_28, Pull::Up),
        Input::new(p.P0_29, Pull::Up),
        Input::new(p.P0_30, Pull::Up),
        Input::new(p.P0_31, Pull::Up),
        Input::new(p.P1_01, Pull::Up),
        Input::new(p.P1_02, Pull::Up),
        Input::new(p.P1_03, Pull::Up),
        Input::new(p.P1_04, Pull::Up),
        Input::new(p.P1_05, Pull::Up),
        Input::new(p.P1_06, Pull::Up),
    ]);

    let status = GAMEPAD_STATUS.init(GamepadStatus::new());

    if let Err(e) = gamepad_task::start(&spawner, keypad, usb.gamepad, status) {
        warn!("Gamepad unavailable: {}", e);
    }
}
