//! # ch9329-core
//!
//! Shared library for driving a WCH CH9329 serial-to-USB-HID bridge chip.
//! It contains the frame encoder, the input state models, and the key code
//! tables.
//!
//! This crate performs no I/O. It has zero dependencies on serial ports,
//! operating system APIs, or async runtimes; the driver crate owns the
//! byte-stream connection.
//!
//! # Architecture overview
//!
//! The CH9329 accepts small command frames over a UART and replays them to a
//! host computer as native USB keyboard, mouse, and consumer-control reports.
//! The host cannot tell the difference between the chip and a real keyboard.
//!
//! - **`keymap`** – Closed identifier sets (`KeyCode`, `ModifierKey`,
//!   `MouseButton`, `MediaKey`) and their static tables: HID usage codes, bit
//!   positions, and the Linux evdev codes and names they correspond to.
//!
//! - **`domain`** – Immutable input models describing one complete desired
//!   state ("these keys are down, the mouse moved by (3, -2)"). Invariants
//!   are checked at construction so an invalid state never exists.
//!
//! - **`protocol`** – The frame layout and the pure encoder turning one input
//!   model into one exact wire frame.
//!
//! ```rust
//! use ch9329_core::{encode_keyboard, KeyCode, KeyboardInput, ModifierKey};
//!
//! let input = KeyboardInput::new([KeyCode::KeyA], [ModifierKey::LeftShift]).unwrap();
//! let frame = encode_keyboard(&input);
//! assert_eq!(frame[..5], [0x57, 0xAB, 0x00, 0x02, 0x08]);
//! assert_eq!(frame[5], 0b0000_0010); // left shift
//! assert_eq!(frame[7], 0x04); // usage id of 'A'
//! ```

pub mod domain;
pub mod keymap;
pub mod protocol;

pub use domain::input::{
    InputError, KeyboardInput, MediaKeyInput, ModelError, MouseInput, MAX_PRESSED_KEYS,
};
pub use keymap::{
    EvdevIdentifier, KeyCode, MediaKey, ModifierKey, MouseButton, UnsupportedCodeError,
};
pub use protocol::codec::{
    checksum, decode_frame, encode_keyboard, encode_media_key, encode_mouse, encode_report,
    hex_string, Frame, ProtocolError,
};
pub use protocol::report::{CommandId, HidReport};
