//! Modifier keys and their bits in the keyboard frame's modifier byte.
//!
//! | Bit | Key         | evdev name       |
//! |-----|-------------|------------------|
//! | 0   | Left Ctrl   | `KEY_LEFTCTRL`   |
//! | 1   | Left Shift  | `KEY_LEFTSHIFT`  |
//! | 2   | Left Alt    | `KEY_LEFTALT`    |
//! | 3   | Left Meta   | `KEY_LEFTMETA`   |
//! | 4   | Right Ctrl  | `KEY_RIGHTCTRL`  |
//! | 5   | Right Shift | `KEY_RIGHTSHIFT` |
//! | 6   | Right Alt   | `KEY_RIGHTALT`   |
//! | 7   | Right Meta  | `KEY_RIGHTMETA`  |
//!
//! The bit order mirrors HID usages 0xE0–0xE7.

use super::EvdevIdentifier;

/// A modifier key, carried as one bit of the modifier byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ModifierKey {
    LeftCtrl = 0,
    LeftShift = 1,
    LeftAlt = 2,
    LeftMeta = 3,
    RightCtrl = 4,
    RightShift = 5,
    RightAlt = 6,
    RightMeta = 7,
}

impl ModifierKey {
    /// Bit position (0–7) within the modifier byte.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this modifier.
    pub fn mask(self) -> u8 {
        1 << self.bit()
    }
}

impl EvdevIdentifier for ModifierKey {
    const ALL: &'static [Self] = &[
        ModifierKey::LeftCtrl,
        ModifierKey::LeftShift,
        ModifierKey::LeftAlt,
        ModifierKey::LeftMeta,
        ModifierKey::RightCtrl,
        ModifierKey::RightShift,
        ModifierKey::RightAlt,
        ModifierKey::RightMeta,
    ];

    fn evdev_entry(self) -> (u16, &'static str) {
        match self {
            ModifierKey::LeftCtrl => (29, "KEY_LEFTCTRL"),
            ModifierKey::LeftShift => (42, "KEY_LEFTSHIFT"),
            ModifierKey::LeftAlt => (56, "KEY_LEFTALT"),
            ModifierKey::LeftMeta => (125, "KEY_LEFTMETA"),
            ModifierKey::RightCtrl => (97, "KEY_RIGHTCTRL"),
            ModifierKey::RightShift => (54, "KEY_RIGHTSHIFT"),
            ModifierKey::RightAlt => (100, "KEY_RIGHTALT"),
            ModifierKey::RightMeta => (126, "KEY_RIGHTMETA"),
        }
    }
}
