//! Binary encoder for CH9329 command frames.
//!
//! Wire format:
//! ```text
//! [0x57][0xAB][address:1][command:1][len:1][payload:len][checksum:1]
//! ```
//! The checksum is the sum of every preceding byte, modulo 256.
//!
//! Payloads have a fixed width per command:
//!
//! | Command         | Payload                                             |
//! |-----------------|-----------------------------------------------------|
//! | Keyboard 0x02   | modifiers, 0x00, key1..key6                         |
//! | Mouse rel 0x05  | 0x01, buttons, x, y, scroll (two's complement)      |
//! | Media 0x03      | 0x02, media bits, 0x00, 0x00                        |
//!
//! Encoding is infallible: every model reaching the encoder has already been
//! validated, and every identifier has a table entry. The decoder exists to
//! inspect frames (tests, dry runs, diagnostics) and checks structure only.

use thiserror::Error;
use tracing::trace;

use crate::domain::input::{KeyboardInput, MediaKeyInput, MouseInput, MAX_PRESSED_KEYS};
use crate::protocol::report::{
    CommandId, HidReport, DEFAULT_ADDRESS, FRAME_HEAD, FRAME_OVERHEAD, HEADER_SIZE,
    MEDIA_REPORT_ID, MOUSE_REL_MARKER,
};

/// Errors that can occur while serializing or decoding a frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The payload does not fit the one-byte length field.
    #[error("payload of {len} bytes exceeds the 255-byte length field")]
    PayloadTooLong { len: usize },

    /// The byte slice is shorter than the frame requires.
    #[error("insufficient data: need at least {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// The first two bytes are not the `57 AB` sync pattern.
    #[error("bad frame head: {0:02X?}")]
    BadHead([u8; 2]),

    /// The trailing checksum does not match the frame contents.
    #[error("checksum mismatch: computed 0x{computed:02X}, frame carries 0x{received:02X}")]
    ChecksumMismatch { computed: u8, received: u8 },
}

/// A structurally valid frame, split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub address: u8,
    pub command: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Returns the command as a known [`CommandId`], if it is one.
    pub fn command_id(&self) -> Option<CommandId> {
        CommandId::try_from(self.command).ok()
    }

    /// Serializes the frame, appending the checksum.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::PayloadTooLong`] if the payload is longer than
    /// the length byte can express.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let len = u8::try_from(self.payload.len()).map_err(|_| ProtocolError::PayloadTooLong {
            len: self.payload.len(),
        })?;
        Ok(assemble(self.address, self.command, len, &self.payload))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Additive checksum: the sum of `bytes` modulo 256.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Encodes any report into its complete frame.
pub fn encode_report(report: &HidReport) -> Vec<u8> {
    match report {
        HidReport::Keyboard(input) => encode_keyboard(input),
        HidReport::Mouse(input) => encode_mouse(input),
        HidReport::MediaKey(input) => encode_media_key(input),
    }
}

/// Encodes a keyboard state.
///
/// Pressed keys fill the six slots in ascending usage order; the remaining
/// slots are zero.
///
/// # Examples
///
/// ```rust
/// use ch9329_core::{encode_keyboard, KeyboardInput};
///
/// let release = encode_keyboard(&KeyboardInput::default());
/// assert_eq!(
///     release,
///     [0x57, 0xAB, 0x00, 0x02, 0x08, 0, 0, 0, 0, 0, 0, 0, 0, 0x0C]
/// );
/// ```
pub fn encode_keyboard(input: &KeyboardInput) -> Vec<u8> {
    let mut payload = Vec::with_capacity(CommandId::Keyboard.payload_len() as usize);
    payload.push(input.modifier_mask());
    payload.push(0x00); // reserved
    let mut slots = [0u8; MAX_PRESSED_KEYS];
    for (slot, key) in slots.iter_mut().zip(input.keys()) {
        *slot = key.code();
    }
    payload.extend_from_slice(&slots);
    finish(CommandId::Keyboard, payload)
}

/// Encodes a relative mouse state.
///
/// # Examples
///
/// ```rust
/// use ch9329_core::{encode_mouse, MouseInput};
///
/// let frame = encode_mouse(&MouseInput::movement(-10, 10).unwrap());
/// assert_eq!(frame[7], 0xF6); // -10
/// assert_eq!(frame[8], 0x0A); // +10
/// ```
pub fn encode_mouse(input: &MouseInput) -> Vec<u8> {
    let payload = vec![
        MOUSE_REL_MARKER,
        input.button_mask(),
        input.x() as u8,
        input.y() as u8,
        input.scroll() as u8,
    ];
    finish(CommandId::MouseRelative, payload)
}

/// Encodes a media key state.
///
/// Only the requested state is emitted. The chip does not release media keys
/// by itself, so a press must be followed by an encoded
/// [`MediaKeyInput::default`] to release it.
pub fn encode_media_key(input: &MediaKeyInput) -> Vec<u8> {
    let payload = vec![MEDIA_REPORT_ID, input.key_mask(), 0x00, 0x00];
    finish(CommandId::MediaKey, payload)
}

/// Splits `bytes` into a [`Frame`], verifying head, length, and checksum.
///
/// Trailing bytes after the checksum are ignored. The consumed length is
/// `FRAME_OVERHEAD + frame.payload.len()`.
///
/// # Errors
///
/// Returns [`ProtocolError`] if the bytes do not form a complete, intact frame.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, ProtocolError> {
    if bytes.len() < FRAME_OVERHEAD {
        return Err(ProtocolError::InsufficientData {
            needed: FRAME_OVERHEAD,
            available: bytes.len(),
        });
    }

    let head = [bytes[0], bytes[1]];
    if head != FRAME_HEAD {
        return Err(ProtocolError::BadHead(head));
    }

    let payload_len = bytes[4] as usize;
    let total = FRAME_OVERHEAD + payload_len;
    if bytes.len() < total {
        return Err(ProtocolError::InsufficientData {
            needed: total,
            available: bytes.len(),
        });
    }

    let computed = checksum(&bytes[..total - 1]);
    let received = bytes[total - 1];
    if computed != received {
        return Err(ProtocolError::ChecksumMismatch { computed, received });
    }

    Ok(Frame {
        address: bytes[2],
        command: bytes[3],
        payload: bytes[HEADER_SIZE..total - 1].to_vec(),
    })
}

/// Formats bytes the way the CH9329 datasheet prints frames: `57 AB 00 ...`.
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn assemble(address: u8, command: u8, len: u8, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    buf.extend_from_slice(&FRAME_HEAD);
    buf.push(address);
    buf.push(command);
    buf.push(len);
    buf.extend_from_slice(payload);
    buf.push(checksum(&buf));
    buf
}

fn finish(command: CommandId, payload: Vec<u8>) -> Vec<u8> {
    // Fixed-width payloads always fit the length byte.
    debug_assert_eq!(payload.len(), command.payload_len() as usize);
    let bytes = assemble(DEFAULT_ADDRESS, command as u8, command.payload_len(), &payload);
    trace!(?command, frame = ?bytes, "encoded frame");
    bytes
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyCode, MediaKey, ModifierKey, MouseButton};

    fn assert_checksum_valid(frame: &[u8]) {
        let (body, last) = frame.split_at(frame.len() - 1);
        assert_eq!(checksum(body), last[0], "checksum of {frame:02X?}");
    }

    // ── Checksum ──────────────────────────────────────────────────────────────

    #[test]
    fn test_checksum_wraps_modulo_256() {
        assert_eq!(checksum(&[]), 0);
        assert_eq!(checksum(&[0xFF, 0x02]), 0x01);
        assert_eq!(checksum(&[0x57, 0xAB, 0x00, 0x02, 0x08]), 0x0C);
    }

    // ── Keyboard ──────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_keyboard_encodes_all_zero_payload() {
        let frame = encode_keyboard(&KeyboardInput::default());
        assert_eq!(
            frame,
            vec![0x57, 0xAB, 0x00, 0x02, 0x08, 0, 0, 0, 0, 0, 0, 0, 0, 0x0C]
        );
    }

    #[test]
    fn test_single_key_fills_first_slot() {
        let input = KeyboardInput::new([KeyCode::KeyA], []).unwrap();
        let frame = encode_keyboard(&input);
        assert_eq!(
            frame,
            vec![0x57, 0xAB, 0x00, 0x02, 0x08, 0x00, 0x00, 0x04, 0, 0, 0, 0, 0, 0x10]
        );
    }

    #[test]
    fn test_modifiers_and_keys_layout() {
        // Arrange
        let input = KeyboardInput::new(
            [KeyCode::KeyC, KeyCode::KeyA],
            [ModifierKey::LeftCtrl, ModifierKey::RightShift],
        )
        .unwrap();

        // Act
        let frame = encode_keyboard(&input);

        // Assert
        assert_eq!(frame.len(), 14);
        assert_eq!(frame[5], 0b0010_0001);
        assert_eq!(frame[6], 0x00, "reserved byte");
        assert_eq!(&frame[7..13], &[0x04, 0x06, 0, 0, 0, 0]);
        assert_checksum_valid(&frame);
    }

    #[test]
    fn test_six_keys_fill_every_slot() {
        let input = KeyboardInput::new(
            [
                KeyCode::KeyF,
                KeyCode::KeyE,
                KeyCode::KeyD,
                KeyCode::KeyC,
                KeyCode::KeyB,
                KeyCode::KeyA,
            ],
            [],
        )
        .unwrap();
        let frame = encode_keyboard(&input);
        assert_eq!(&frame[7..13], &[0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
        assert_checksum_valid(&frame);
    }

    // ── Mouse ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_mouse_encodes_release_frame() {
        let frame = encode_mouse(&MouseInput::default());
        assert_eq!(frame, vec![0x57, 0xAB, 0x00, 0x05, 0x05, 0x01, 0, 0, 0, 0, 0x0D]);
    }

    #[test]
    fn test_mouse_positive_then_negative_movement() {
        let forward = encode_mouse(&MouseInput::movement(10, 10).unwrap());
        let back = encode_mouse(&MouseInput::movement(-10, -10).unwrap());

        assert_eq!(forward, vec![0x57, 0xAB, 0x00, 0x05, 0x05, 0x01, 0x00, 0x0A, 0x0A, 0x00, 0x21]);
        assert_eq!(back, vec![0x57, 0xAB, 0x00, 0x05, 0x05, 0x01, 0x00, 0xF6, 0xF6, 0x00, 0xF9]);
    }

    #[test]
    fn test_mouse_buttons_and_scroll() {
        let input = MouseInput::new([MouseButton::Left, MouseButton::Right], 5, 5, -3).unwrap();
        let frame = encode_mouse(&input);
        assert_eq!(&frame[5..10], &[0x01, 0x03, 0x05, 0x05, 0xFD]);
        assert_checksum_valid(&frame);
    }

    #[test]
    fn test_mouse_extremes_are_twos_complement() {
        let frame = encode_mouse(&MouseInput::new([], -128, 127, -1).unwrap());
        assert_eq!(&frame[7..10], &[0x80, 0x7F, 0xFF]);
    }

    // ── Media ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_media_press_then_release_are_distinct_frames() {
        let press = encode_media_key(&MediaKeyInput::new([MediaKey::Mute]));
        let release = encode_media_key(&MediaKeyInput::default());

        assert_eq!(press, vec![0x57, 0xAB, 0x00, 0x03, 0x04, 0x02, 0x04, 0x00, 0x00, 0x0F]);
        assert_eq!(release, vec![0x57, 0xAB, 0x00, 0x03, 0x04, 0x02, 0x00, 0x00, 0x00, 0x0B]);
    }

    #[test]
    fn test_media_press_has_no_implicit_release() {
        // One model in, exactly one frame out.
        let frame = encode_media_key(&MediaKeyInput::new([MediaKey::VolumeUp]));
        assert_eq!(frame.len(), FRAME_OVERHEAD + 4);
        assert_eq!(frame[6], 0x01);
    }

    // ── Cross-variant properties ──────────────────────────────────────────────

    #[test]
    fn test_every_single_identifier_frame_has_valid_checksum() {
        use crate::keymap::EvdevIdentifier;

        let reports = KeyCode::ALL
            .iter()
            .map(|&k| HidReport::from(KeyboardInput::new([k], []).unwrap()))
            .chain(
                ModifierKey::ALL
                    .iter()
                    .map(|&m| HidReport::from(KeyboardInput::new([], [m]).unwrap())),
            )
            .chain(MouseButton::ALL.iter().map(|&b| HidReport::from(MouseInput::buttons_only([b]))))
            .chain(MediaKey::ALL.iter().map(|&k| HidReport::from(MediaKeyInput::new([k]))));

        for report in reports {
            let frame = encode_report(&report);
            assert_checksum_valid(&frame);
            assert_eq!(frame[3], report.command_id() as u8);
            assert_eq!(frame[4] as usize, frame.len() - FRAME_OVERHEAD);
        }
    }

    // ── Decoding ──────────────────────────────────────────────────────────────

    #[test]
    fn test_hex_string_matches_datasheet_notation() {
        let frame = encode_media_key(&MediaKeyInput::default());
        assert_eq!(hex_string(&frame), "57 AB 00 03 04 02 00 00 00 0B");
        assert_eq!(hex_string(&[]), "");
    }

    #[test]
    fn test_decode_frame_splits_fields() {
        let bytes = encode_media_key(&MediaKeyInput::new([MediaKey::Mute]));
        let frame = decode_frame(&bytes).unwrap();
        assert_eq!(frame.address, 0x00);
        assert_eq!(frame.command_id(), Some(CommandId::MediaKey));
        assert_eq!(frame.payload, vec![0x02, 0x04, 0x00, 0x00]);
        assert_eq!(frame.to_bytes(), Ok(bytes));
    }

    // ── Length field ──────────────────────────────────────────────────────────

    #[test]
    fn test_largest_payload_fits_length_byte() {
        // Arrange
        let frame = Frame {
            address: DEFAULT_ADDRESS,
            command: 0x02,
            payload: vec![0xAA; 255],
        };

        // Act
        let bytes = frame.to_bytes().unwrap();

        // Assert
        assert_eq!(bytes[4], 0xFF);
        assert_eq!(bytes.len(), FRAME_OVERHEAD + 255);
        assert_eq!(decode_frame(&bytes), Ok(frame));
    }

    #[test]
    fn test_payload_past_length_byte_is_rejected() {
        let at_boundary = Frame {
            address: DEFAULT_ADDRESS,
            command: 0x02,
            payload: vec![0xAA; 256],
        };
        let well_past = Frame {
            payload: vec![0xAA; 300],
            ..at_boundary.clone()
        };

        assert_eq!(at_boundary.to_bytes(), Err(ProtocolError::PayloadTooLong { len: 256 }));
        assert_eq!(well_past.to_bytes(), Err(ProtocolError::PayloadTooLong { len: 300 }));
    }

    #[test]
    fn test_payload_too_long_message_names_the_limit() {
        let msg = ProtocolError::PayloadTooLong { len: 300 }.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("255"));
    }

    #[test]
    fn test_decode_frame_rejects_short_input() {
        assert_eq!(
            decode_frame(&[0x57, 0xAB, 0x00]),
            Err(ProtocolError::InsufficientData { needed: 6, available: 3 })
        );
        // Header claims 8 payload bytes but only 2 follow
        assert_eq!(
            decode_frame(&[0x57, 0xAB, 0x00, 0x02, 0x08, 0x00, 0x00]),
            Err(ProtocolError::InsufficientData { needed: 14, available: 7 })
        );
    }

    #[test]
    fn test_decode_frame_rejects_bad_head() {
        assert_eq!(
            decode_frame(&[0x55, 0xAA, 0x00, 0x02, 0x00, 0x00]),
            Err(ProtocolError::BadHead([0x55, 0xAA]))
        );
    }

    #[test]
    fn test_decode_frame_rejects_corrupted_checksum() {
        let mut bytes = encode_keyboard(&KeyboardInput::default());
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        assert_eq!(
            decode_frame(&bytes),
            Err(ProtocolError::ChecksumMismatch { computed: 0x0C, received: 0xF3 })
        );
    }
}
