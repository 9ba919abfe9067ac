//! Integration tests for pad2usb host-testable logic.
//!
//! Drives the public API the way the firmware's task does: a keypad
//! feeding `GamepadApp::poll`, whose reports are serialised onto the wire.

use embassy_futures::block_on;
use pad2usb::config::{GAMEPAD_USB_BUS_ID, KEY_COUNT};
use pad2usb::hid::{GAMEPAD_REPORT_SIZE, HAT_CENTER};
use pad2usb::{Error, GamepadApp, GamepadReport, GamepadStatus, GamepadTransport, KeyScan};
use pad2usb::{PollOutcome, UsbBusId};

/// Key source whose pressed key the test sets between polls.
struct HeldKey(Option<u8>);

impl KeyScan for HeldKey {
    fn read_key(&mut self) -> Option<u8> {
        self.0
    }
}

/// Captures serialised reports exactly as they would hit the endpoint.
struct WireTransport {
    report: GamepadReport,
    frames: Vec<[u8; GAMEPAD_REPORT_SIZE]>,
}

impl GamepadTransport for WireTransport {
    fn report_mut(&mut self) -> &mut GamepadReport {
        &mut self.report
    }

    fn is_configured(&self, bus: UsbBusId) -> bool {
        bus == GAMEPAD_USB_BUS_ID
    }

    async fn send_report(&mut self, _bus: UsbBusId) -> Result<(), Error> {
        let mut frame = [0u8; GAMEPAD_REPORT_SIZE];
        match self.report.serialize(&mut frame) {
            0 => Err(Error::BufferOverflow),
            _ => {
                self.frames.push(frame);
                Ok(())
            }
        }
    }
}

#[test]
fn scan_loop_emits_one_frame_per_key_change() {
    let mut app = GamepadApp::new(GAMEPAD_USB_BUS_ID);
    let status = GamepadStatus::new();
    let mut keys = HeldKey(None);
    let mut transport = WireTransport {
        report: GamepadReport::neutral(),
        frames: Vec::new(),
    };

    // Press key 9 for three scans, then release for two.
    let timeline = [Some(9), Some(9), Some(9), None, None];
    let mut outcomes = Vec::new();
    for key in timeline {
        keys.0 = key;
        outcomes.push(block_on(app.poll(&mut keys, &mut transport)));
        status.publish(app.buttons());
    }

    assert_eq!(
        outcomes,
        [
            PollOutcome::Sent,
            PollOutcome::Unchanged,
            PollOutcome::Unchanged,
            PollOutcome::Sent,
            PollOutcome::Unchanged,
        ]
    );
    assert_eq!(
        transport.frames,
        [
            [0x00, 0x02, 0, 0, 0, 0, 0, 0, HAT_CENTER],
            [0x00, 0x00, 0, 0, 0, 0, 0, 0, HAT_CENTER],
        ]
    );
    assert_eq!(status.buttons(), 0);
}

#[test]
fn every_keypad_key_reaches_the_wire() {
    let mut app = GamepadApp::new(GAMEPAD_USB_BUS_ID);
    let mut keys = HeldKey(None);
    let mut transport = WireTransport {
        report: GamepadReport::neutral(),
        frames: Vec::new(),
    };

    for k in 0..KEY_COUNT as u8 {
        keys.0 = Some(k);
        assert_eq!(
            block_on(app.poll(&mut keys, &mut transport)),
            PollOutcome::Sent
        );
    }

    assert_eq!(transport.frames.len(), KEY_COUNT);
    for (k, frame) in transport.frames.iter().enumerate() {
        let mask = u16::from_le_bytes([frame[0], frame[1]]);
        assert_eq!(mask, 1 << k);
    }
}
