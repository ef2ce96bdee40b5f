//! Protocol module containing the frame constants, report variants, and the
//! binary encoder.

pub mod codec;
pub mod report;

pub use codec::{
    checksum, decode_frame, encode_keyboard, encode_media_key, encode_mouse, encode_report,
    hex_string, Frame, ProtocolError,
};
pub use report::{CommandId, HidReport};
