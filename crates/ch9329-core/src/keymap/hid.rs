//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page) accepted by the CH9329.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID?
//!
//! The USB HID standard assigns a number to every physical key position. All
//! keyboard keys live on usage page 0x07:
//!
//! | Key          | HID Usage ID | evdev name  |
//! |--------------|--------------|-------------|
//! | Letter A     | 0x04         | `KEY_A`     |
//! | Letter B     | 0x05         | `KEY_B`     |
//! | Enter        | 0x28         | `KEY_ENTER` |
//!
//! Usage IDs identify positions, not characters; the host's keyboard layout
//! decides which character a key produces.
//!
//! Modifier keys (usages 0xE0–0xE7) are deliberately absent from [`KeyCode`]:
//! the chip carries them as bits of the modifier byte, see
//! [`super::ModifierKey`].

use super::EvdevIdentifier;

/// A keyboard key the CH9329 can report.
///
/// The discriminant of each variant is its HID Usage ID, which is exactly the
/// byte placed in a key slot of the keyboard frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys and punctuation (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Keypad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    // Non-US backslash and Application key (HID 0x64–0x65)
    IntlBackslash = 0x64,
    ContextMenu = 0x65,
}

impl KeyCode {
    /// Returns the HID Usage ID placed in a keyboard frame key slot.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl EvdevIdentifier for KeyCode {
    const ALL: &'static [Self] = &[
        KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
        KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
        KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
        KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
        KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
        KeyCode::KeyZ,
        KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4, KeyCode::Digit5,
        KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9, KeyCode::Digit0,
        KeyCode::Enter, KeyCode::Escape, KeyCode::Backspace, KeyCode::Tab, KeyCode::Space,
        KeyCode::Minus, KeyCode::Equal, KeyCode::BracketLeft, KeyCode::BracketRight,
        KeyCode::Backslash, KeyCode::Semicolon, KeyCode::Quote, KeyCode::Backquote,
        KeyCode::Comma, KeyCode::Period, KeyCode::Slash, KeyCode::CapsLock,
        KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5, KeyCode::F6,
        KeyCode::F7, KeyCode::F8, KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
        KeyCode::PrintScreen, KeyCode::ScrollLock, KeyCode::Pause, KeyCode::Insert,
        KeyCode::Home, KeyCode::PageUp, KeyCode::Delete, KeyCode::End, KeyCode::PageDown,
        KeyCode::ArrowRight, KeyCode::ArrowLeft, KeyCode::ArrowDown, KeyCode::ArrowUp,
        KeyCode::NumLock, KeyCode::NumpadDivide, KeyCode::NumpadMultiply,
        KeyCode::NumpadSubtract, KeyCode::NumpadAdd, KeyCode::NumpadEnter,
        KeyCode::Numpad1, KeyCode::Numpad2, KeyCode::Numpad3, KeyCode::Numpad4,
        KeyCode::Numpad5, KeyCode::Numpad6, KeyCode::Numpad7, KeyCode::Numpad8,
        KeyCode::Numpad9, KeyCode::Numpad0, KeyCode::NumpadDecimal,
        KeyCode::IntlBackslash, KeyCode::ContextMenu,
    ];

    fn evdev_entry(self) -> (u16, &'static str) {
        match self {
            KeyCode::KeyA => (30, "KEY_A"),
            KeyCode::KeyB => (48, "KEY_B"),
            KeyCode::KeyC => (46, "KEY_C"),
            KeyCode::KeyD => (32, "KEY_D"),
            KeyCode::KeyE => (18, "KEY_E"),
            KeyCode::KeyF => (33, "KEY_F"),
            KeyCode::KeyG => (34, "KEY_G"),
            KeyCode::KeyH => (35, "KEY_H"),
            KeyCode::KeyI => (23, "KEY_I"),
            KeyCode::KeyJ => (36, "KEY_J"),
            KeyCode::KeyK => (37, "KEY_K"),
            KeyCode::KeyL => (38, "KEY_L"),
            KeyCode::KeyM => (50, "KEY_M"),
            KeyCode::KeyN => (49, "KEY_N"),
            KeyCode::KeyO => (24, "KEY_O"),
            KeyCode::KeyP => (25, "KEY_P"),
            KeyCode::KeyQ => (16, "KEY_Q"),
            KeyCode::KeyR => (19, "KEY_R"),
            KeyCode::KeyS => (31, "KEY_S"),
            KeyCode::KeyT => (20, "KEY_T"),
            KeyCode::KeyU => (22, "KEY_U"),
            KeyCode::KeyV => (47, "KEY_V"),
            KeyCode::KeyW => (17, "KEY_W"),
            KeyCode::KeyX => (45, "KEY_X"),
            KeyCode::KeyY => (21, "KEY_Y"),
            KeyCode::KeyZ => (44, "KEY_Z"),
            KeyCode::Digit1 => (2, "KEY_1"),
            KeyCode::Digit2 => (3, "KEY_2"),
            KeyCode::Digit3 => (4, "KEY_3"),
            KeyCode::Digit4 => (5, "KEY_4"),
            KeyCode::Digit5 => (6, "KEY_5"),
            KeyCode::Digit6 => (7, "KEY_6"),
            KeyCode::Digit7 => (8, "KEY_7"),
            KeyCode::Digit8 => (9, "KEY_8"),
            KeyCode::Digit9 => (10, "KEY_9"),
            KeyCode::Digit0 => (11, "KEY_0"),
            KeyCode::Enter => (28, "KEY_ENTER"),
            KeyCode::Escape => (1, "KEY_ESC"),
            KeyCode::Backspace => (14, "KEY_BACKSPACE"),
            KeyCode::Tab => (15, "KEY_TAB"),
            KeyCode::Space => (57, "KEY_SPACE"),
            KeyCode::Minus => (12, "KEY_MINUS"),
            KeyCode::Equal => (13, "KEY_EQUAL"),
            KeyCode::BracketLeft => (26, "KEY_LEFTBRACE"),
            KeyCode::BracketRight => (27, "KEY_RIGHTBRACE"),
            KeyCode::Backslash => (43, "KEY_BACKSLASH"),
            KeyCode::Semicolon => (39, "KEY_SEMICOLON"),
            KeyCode::Quote => (40, "KEY_APOSTROPHE"),
            KeyCode::Backquote => (41, "KEY_GRAVE"),
            KeyCode::Comma => (51, "KEY_COMMA"),
            KeyCode::Period => (52, "KEY_DOT"),
            KeyCode::Slash => (53, "KEY_SLASH"),
            KeyCode::CapsLock => (58, "KEY_CAPSLOCK"),
            KeyCode::F1 => (59, "KEY_F1"),
            KeyCode::F2 => (60, "KEY_F2"),
            KeyCode::F3 => (61, "KEY_F3"),
            KeyCode::F4 => (62, "KEY_F4"),
            KeyCode::F5 => (63, "KEY_F5"),
            KeyCode::F6 => (64, "KEY_F6"),
            KeyCode::F7 => (65, "KEY_F7"),
            KeyCode::F8 => (66, "KEY_F8"),
            KeyCode::F9 => (67, "KEY_F9"),
            KeyCode::F10 => (68, "KEY_F10"),
            KeyCode::F11 => (87, "KEY_F11"),
            KeyCode::F12 => (88, "KEY_F12"),
            KeyCode::PrintScreen => (99, "KEY_SYSRQ"),
            KeyCode::ScrollLock => (70, "KEY_SCROLLLOCK"),
            KeyCode::Pause => (119, "KEY_PAUSE"),
            KeyCode::Insert => (110, "KEY_INSERT"),
            KeyCode::Home => (102, "KEY_HOME"),
            KeyCode::PageUp => (104, "KEY_PAGEUP"),
            KeyCode::Delete => (111, "KEY_DELETE"),
            KeyCode::End => (107, "KEY_END"),
            KeyCode::PageDown => (109, "KEY_PAGEDOWN"),
            KeyCode::ArrowRight => (106, "KEY_RIGHT"),
            KeyCode::ArrowLeft => (105, "KEY_LEFT"),
            KeyCode::ArrowDown => (108, "KEY_DOWN"),
            KeyCode::ArrowUp => (103, "KEY_UP"),
            KeyCode::NumLock => (69, "KEY_NUMLOCK"),
            KeyCode::NumpadDivide => (98, "KEY_KPSLASH"),
            KeyCode::NumpadMultiply => (55, "KEY_KPASTERISK"),
            KeyCode::NumpadSubtract => (74, "KEY_KPMINUS"),
            KeyCode::NumpadAdd => (78, "KEY_KPPLUS"),
            KeyCode::NumpadEnter => (96, "KEY_KPENTER"),
            KeyCode::Numpad1 => (79, "KEY_KP1"),
            KeyCode::Numpad2 => (80, "KEY_KP2"),
            KeyCode::Numpad3 => (81, "KEY_KP3"),
            KeyCode::Numpad4 => (75, "KEY_KP4"),
            KeyCode::Numpad5 => (76, "KEY_KP5"),
            KeyCode::Numpad6 => (77, "KEY_KP6"),
            KeyCode::Numpad7 => (71, "KEY_KP7"),
            KeyCode::Numpad8 => (72, "KEY_KP8"),
            KeyCode::Numpad9 => (73, "KEY_KP9"),
            KeyCode::Numpad0 => (82, "KEY_KP0"),
            KeyCode::NumpadDecimal => (83, "KEY_KPDOT"),
            KeyCode::IntlBackslash => (86, "KEY_102ND"),
            KeyCode::ContextMenu => (127, "KEY_COMPOSE"),
        }
    }
}
