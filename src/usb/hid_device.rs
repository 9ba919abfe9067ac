//! USB HID gamepad device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes a single HID IN endpoint.

use crate::config;
use crate::error::Error;
use crate::hid::{GamepadReport, GAMEPAD_REPORT_DESCRIPTOR, GAMEPAD_REPORT_SIZE};
use crate::traits::{GamepadTransport, UsbBusId};
use super::link::UsbLinkState;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_time::{with_timeout, Duration};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

/// Endpoint buffer size; must hold a whole report.
const HID_PACKET_SIZE: usize = 16;

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

/// USB device runner on the nRF52840 USBD.
pub type UsbDriverDevice = UsbDevice<'static, UsbDriver>;

/// HID writer for the gamepad endpoint.
pub type GamepadWriter = HidWriter<'static, UsbDriver, HID_PACKET_SIZE>;

static GAMEPAD_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();
static USB_LINK: UsbLinkState = UsbLinkState::new();

/// Tracks whether the host has selected our configuration.
struct UsbStateHandler;

impl embassy_usb::Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        USB_LINK.on_enabled(enabled);
        if !enabled {
            info!("USB disabled (power removed)");
        }
    }

    fn reset(&mut self) {
        USB_LINK.on_reset();
    }

    fn configured(&mut self, configured: bool) {
        USB_LINK.on_configured(configured);
        if configured {
            info!("USB configured by host");
        } else {
            info!("USB deconfigured");
        }
    }
}

/// Whether the device on `bus` is enumerated and configured.
pub fn bus_configured(bus: UsbBusId) -> bool {
    USB_LINK.is_configured(bus)
}

/// Build result containing the USB device runner and the gamepad transport.
pub struct UsbHidDevice {
    pub device: UsbDriverDevice,
    pub gamepad: UsbGamepad,
}

/// Initialise the USB stack and create the HID gamepad device.
///
/// Must be called exactly once. All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbHidDevice {
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 64]),
    );

    builder.handler(USB_STATE_HANDLER.init(UsbStateHandler));

    let gamepad_state = GAMEPAD_STATE.init(State::new());
    let gamepad_config = HidConfig {
        report_descriptor: GAMEPAD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: HID_PACKET_SIZE as u16,
    };
    let writer = HidWriter::new(&mut builder, gamepad_state, gamepad_config);

    let device = builder.build();

    info!("USB HID gamepad device initialised");

    UsbHidDevice {
        device,
        gamepad: UsbGamepad::new(writer),
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles enumeration, suspend/resume, and endpoint servicing.
pub async fn run_usb_device(mut device: UsbDriverDevice) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Gamepad transport over the HID IN endpoint.
pub struct UsbGamepad {
    writer: GamepadWriter,
    report: GamepadReport,
}

impl UsbGamepad {
    pub fn new(writer: GamepadWriter) -> Self {
        Self {
            writer,
            report: GamepadReport::neutral(),
        }
    }
}

impl GamepadTransport for UsbGamepad {
    fn report_mut(&mut self) -> &mut GamepadReport {
        &mut self.report
    }

    fn is_configured(&self, bus: UsbBusId) -> bool {
        bus_configured(bus)
    }

    async fn send_report(&mut self, bus: UsbBusId) -> Result<(), Error> {
        if !bus_configured(bus) {
            return Err(Error::NotConfigured);
        }

        let mut buf = [0u8; GAMEPAD_REPORT_SIZE];
        let n = self.report.serialize(&mut buf);
        if n == 0 {
            return Err(Error::BufferOverflow);
        }

        // A suspended host never drains the endpoint.
        let timeout = Duration::from_millis(config::USB_SEND_TIMEOUT_MS);
        match with_timeout(timeout, self.writer.write(&buf[..n])).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_e)) => {
                debug!("USB gamepad write failed");
                Err(Error::Usb)
            }
            Err(_) => {
                debug!("USB gamepad write timed out");
                Err(Error::Timeout)
            }
        }
    }
}
