//! ch9329-driver library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the driver do?
//!
//! A CH9329 sits between a serial port and a USB port. Whatever frames arrive
//! on its UART are replayed to the USB host as keyboard, mouse, and media-key
//! reports. The driver is the thin layer that makes that usable from Rust:
//!
//! 1. The caller builds an input model from `ch9329-core` (or raw evdev codes).
//! 2. [`Ch9329Driver`] encodes it into one frame.
//! 3. The frame is written in a single blocking call through a
//!    [`ByteTransport`], normally a [`SerialTransport`].
//!
//! The driver never remembers what it sent. Each call carries a complete
//! state, and a press is released by sending the empty state afterwards.
//!
//! ```no_run
//! use ch9329_core::{KeyCode, KeyboardInput};
//! use ch9329_driver::{Ch9329Driver, SerialSettings, SerialTransport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = SerialTransport::new(SerialSettings::default());
//! let mut driver = Ch9329Driver::new(transport)?;
//! driver.send_keyboard_input(&KeyboardInput::new([KeyCode::KeyA], [])?)?;
//! driver.send_keyboard_input(&KeyboardInput::default())?;
//! # Ok(())
//! # }
//! ```

/// Application layer: the driver and the transport contract it consumes.
pub mod application;

/// Infrastructure layer: serial and in-memory transports, config storage.
pub mod infrastructure;

pub use application::driver::{ByteTransport, Ch9329Driver, DriverError, TransportError};
pub use infrastructure::storage::config::{DriverConfig, SerialSettings};
pub use infrastructure::transport::{MockTransport, SerialTransport};
