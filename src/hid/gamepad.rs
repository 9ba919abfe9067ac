//! USB HID gamepad report.
//!
//! Layout (9 bytes):
//! ```text
//! Byte 0-1: Button bitfield, little endian (bit N = logical button N,
//!           HID usage Button N+1)
//! Byte 2:   Left stick X   (signed, 0 = centered)
//! Byte 3:   Left stick Y   (signed, 0 = centered)
//! Byte 4:   Right stick X  (signed, 0 = centered)
//! Byte 5:   Right stick Y  (signed, 0 = centered)
//! Byte 6:   Left trigger   (0 = released)
//! Byte 7:   Right trigger  (0 = released)
//! Byte 8:   Hat switch in the low nibble (0-7 = N..NW, 8 = centered)
//! ```

/// Gamepad report size in bytes.
pub const GAMEPAD_REPORT_SIZE: usize = 9;

/// Hat switch value meaning "no direction" (outside the 0-7 logical range,
/// reported as the null state).
pub const HAT_CENTER: u8 = 0x08;

/// Neutral position of a stick axis.
pub const AXIS_CENTER: i8 = 0;

/// Neutral position of a trigger.
pub const TRIGGER_RELEASED: u8 = 0;

/// USB HID gamepad input report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    /// Button bitfield, bit N = logical button N (HID usage Button N+1).
    pub buttons: u16,
    pub left_x: i8,
    pub left_y: i8,
    pub right_x: i8,
    pub right_y: i8,
    pub left_trigger: u8,
    pub right_trigger: u8,
    /// Directional pad, see [`HAT_CENTER`].
    pub hat: u8,
}

impl Default for GamepadReport {
    fn default() -> Self {
        Self::neutral()
    }
}

impl GamepadReport {
    /// No buttons, sticks centered, triggers released, hat centered.
    pub const fn neutral() -> Self {
        Self {
            buttons: 0,
            left_x: AXIS_CENTER,
            left_y: AXIS_CENTER,
            right_x: AXIS_CENTER,
            right_y: AXIS_CENTER,
            left_trigger: TRIGGER_RELEASED,
            right_trigger: TRIGGER_RELEASED,
            hat: HAT_CENTER,
        }
    }

    /// Write a new button mask and force every analog field back to neutral.
    pub fn apply_buttons(&mut self, buttons: u16) {
        self.buttons = buttons;
        self.left_x = AXIS_CENTER;
        self.left_y = AXIS_CENTER;
        self.right_x = AXIS_CENTER;
        self.right_y = AXIS_CENTER;
        self.left_trigger = TRIGGER_RELEASED;
        self.right_trigger = TRIGGER_RELEASED;
        self.hat = HAT_CENTER;
    }

    /// Returns `true` when every field holds its neutral value.
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 9), or 0 if `buf` is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < GAMEPAD_REPORT_SIZE {
            return 0;
        }
        let [lo, hi] = self.buttons.to_le_bytes();
        buf[0] = lo;
        buf[1] = hi;
        buf[2] = self.left_x as u8;
        buf[3] = self.left_y as u8;
        buf[4] = self.right_x as u8;
        buf[5] = self.right_y as u8;
        buf[6] = self.left_trigger;
        buf[7] = self.right_trigger;
        buf[8] = self.hat & 0x0F;
        GAMEPAD_REPORT_SIZE
    }
}

// USB HID report descriptor for a 16-button gamepad

/// USB HID Report Descriptor matching [`GamepadReport`].
pub const GAMEPAD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Buttons (16 bits) -
    0x05, 0x09, //   Usage Page (Buttons)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x10, //   Report Count (16)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Sticks: X, Y, Z, Rz -
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7F, //   Logical Maximum (127)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Triggers: Rx, Ry -
    0x09, 0x33, //   Usage (Rx)
    0x09, 0x34, //   Usage (Ry)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x02, //   Report Count (2)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Hat switch (4 bits + 4 padding) -
    0x09, 0x39, //   Usage (Hat switch)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x07, //   Logical Maximum (7)
    0x35, 0x00, //   Physical Minimum (0)
    0x46, 0x3B, 0x01, //   Physical Maximum (315)
    0x65, 0x14, //   Unit (Degrees)
    0x75, 0x04, //   Report Size (4)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    0x65, 0x00, //   Unit (None)
    0x75, 0x04, //   Report Size (4)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x01, //   Input (Constant) - padding
    //
    0xC0, // End Collection (Application)
];
