//! CH9329 command constants and the report variants the encoder accepts.
//!
//! Values follow the CH9329 serial communication protocol (WCH, v1.0).

use crate::domain::input::{KeyboardInput, MediaKeyInput, MouseInput};

// ── Frame constants ───────────────────────────────────────────────────────────

/// Two-byte sync pattern opening every frame.
pub const FRAME_HEAD: [u8; 2] = [0x57, 0xAB];

/// Address byte in single-device mode.
pub const DEFAULT_ADDRESS: u8 = 0x00;

/// Head (2) + address (1) + command (1) + length (1).
pub const HEADER_SIZE: usize = 5;

/// Header plus the trailing checksum byte.
pub const FRAME_OVERHEAD: usize = HEADER_SIZE + 1;

/// Keyboard payload: modifier, reserved, six key slots.
pub const KEYBOARD_PAYLOAD_LEN: u8 = 8;

/// Relative mouse payload: marker, buttons, x, y, scroll.
pub const MOUSE_REL_PAYLOAD_LEN: u8 = 5;

/// Media payload: report id plus three bitmask bytes.
pub const MEDIA_PAYLOAD_LEN: u8 = 4;

/// First byte of every relative mouse payload.
pub const MOUSE_REL_MARKER: u8 = 0x01;

/// Report id selecting the multimedia-key report.
pub const MEDIA_REPORT_ID: u8 = 0x02;

// ── Command ids ───────────────────────────────────────────────────────────────

/// Command byte of the frames this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandId {
    /// `CMD_SEND_KB_GENERAL_DATA`: standard keyboard report.
    Keyboard = 0x02,
    /// `CMD_SEND_KB_MEDIA_DATA`: multimedia keys.
    MediaKey = 0x03,
    /// `CMD_SEND_MS_REL_DATA`: relative mouse report.
    MouseRelative = 0x05,
}

impl CommandId {
    /// Fixed payload length the chip expects for this command.
    pub fn payload_len(self) -> u8 {
        match self {
            CommandId::Keyboard => KEYBOARD_PAYLOAD_LEN,
            CommandId::MediaKey => MEDIA_PAYLOAD_LEN,
            CommandId::MouseRelative => MOUSE_REL_PAYLOAD_LEN,
        }
    }
}

impl TryFrom<u8> for CommandId {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0x02 => Ok(CommandId::Keyboard),
            0x03 => Ok(CommandId::MediaKey),
            0x05 => Ok(CommandId::MouseRelative),
            _ => Err(()),
        }
    }
}

// ── Report variants ───────────────────────────────────────────────────────────

/// One input model of any kind; the encoder turns each into one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HidReport {
    Keyboard(KeyboardInput),
    Mouse(MouseInput),
    MediaKey(MediaKeyInput),
}

impl HidReport {
    /// Returns the command id this report is sent with.
    pub fn command_id(&self) -> CommandId {
        match self {
            HidReport::Keyboard(_) => CommandId::Keyboard,
            HidReport::Mouse(_) => CommandId::MouseRelative,
            HidReport::MediaKey(_) => CommandId::MediaKey,
        }
    }
}

impl From<KeyboardInput> for HidReport {
    fn from(input: KeyboardInput) -> Self {
        HidReport::Keyboard(input)
    }
}

impl From<MouseInput> for HidReport {
    fn from(input: MouseInput) -> Self {
        HidReport::Mouse(input)
    }
}

impl From<MediaKeyInput> for HidReport {
    fn from(input: MediaKeyInput) -> Self {
        HidReport::MediaKey(input)
    }
}
