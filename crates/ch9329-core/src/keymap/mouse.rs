//! Mouse buttons and their bits in the relative-mouse button byte.

use super::EvdevIdentifier;

/// A mouse button, carried as one bit of the button byte.
///
/// The CH9329 firmware requires bits 3–7 of the button byte to be zero, so
/// only the three standard buttons exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl MouseButton {
    /// Bit position within the button byte.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this button.
    pub fn mask(self) -> u8 {
        1 << self.bit()
    }
}

impl EvdevIdentifier for MouseButton {
    const ALL: &'static [Self] = &[MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    fn evdev_entry(self) -> (u16, &'static str) {
        match self {
            MouseButton::Left => (0x110, "BTN_LEFT"),
            MouseButton::Right => (0x111, "BTN_RIGHT"),
            MouseButton::Middle => (0x112, "BTN_MIDDLE"),
        }
    }
}
