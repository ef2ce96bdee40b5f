//! Ch9329Driver: encodes input models and writes each frame to the chip.
//!
//! The driver sits at the application layer and delegates every byte it
//! produces to a [`ByteTransport`]. The concrete transports (serial port,
//! in-memory recorder) live in the infrastructure layer.
//!
//! Every send is a complete, self-contained state. Nothing is cached between
//! calls, so the driver never synthesizes a release on the caller's behalf;
//! sending the empty model is how a press ends.

use ch9329_core::{
    encode_keyboard, encode_media_key, encode_mouse, encode_report, hex_string, HidReport,
    InputError, KeyboardInput, MediaKeyInput, ModelError, MouseInput, UnsupportedCodeError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure at the byte-stream boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The operating system rejected a read, write, or flush.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serial device could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// A write was attempted before `open` succeeded.
    #[error("transport is not open")]
    NotOpen,
}

/// Any failure surfaced by [`Ch9329Driver`].
#[derive(Debug, Error)]
pub enum DriverError {
    /// The requested input state violates a model invariant.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// A raw evdev code has no CH9329 mapping.
    #[error(transparent)]
    UnsupportedCode(#[from] UnsupportedCodeError),

    /// The transport failed to open, write, or close.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The driver was closed; nothing more can be sent.
    #[error("driver is closed")]
    Closed,
}

impl From<ModelError> for DriverError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnsupportedCode(e) => DriverError::UnsupportedCode(e),
            ModelError::Invalid(e) => DriverError::Input(e),
        }
    }
}

/// Byte-stream connection to a CH9329.
///
/// Implementations must make `open` and `close` idempotent. `write` either
/// delivers every byte or returns an error; there is no partial success.
#[cfg_attr(test, mockall::automock)]
pub trait ByteTransport {
    /// Acquires the underlying connection. A second call on an open
    /// transport is a no-op.
    fn open(&mut self) -> Result<(), TransportError>;

    /// Blocks until all of `bytes` have been handed to the device.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Releases the underlying connection. Closing twice is a no-op.
    fn close(&mut self) -> Result<(), TransportError>;

    fn is_open(&self) -> bool;
}

impl<T: ByteTransport + ?Sized> ByteTransport for Box<T> {
    fn open(&mut self) -> Result<(), TransportError> {
        (**self).open()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).write(bytes)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// Driver for one CH9329 chip.
///
/// Owns its transport exclusively. Dropping the driver closes the transport,
/// so the connection is released on every exit path, including early returns
/// through `?` and panics that unwind.
pub struct Ch9329Driver<T: ByteTransport> {
    transport: T,
    closed: bool,
}

impl<T: ByteTransport> Ch9329Driver<T> {
    /// Opens `transport` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Transport`] if the transport cannot be opened.
    pub fn new(mut transport: T) -> Result<Self, DriverError> {
        transport.open()?;
        info!("CH9329 transport opened");
        Ok(Self {
            transport,
            closed: false,
        })
    }

    /// Sends the given keyboard state.
    ///
    /// # Errors
    ///
    /// [`DriverError::Closed`] after [`close`](Self::close), otherwise
    /// [`DriverError::Transport`] if the write fails.
    pub fn send_keyboard_input(&mut self, input: &KeyboardInput) -> Result<(), DriverError> {
        self.ensure_open()?;
        self.write_frame(&encode_keyboard(input))
    }

    /// Sends the given relative mouse state.
    ///
    /// # Errors
    ///
    /// See [`send_keyboard_input`](Self::send_keyboard_input).
    pub fn send_mouse_input(&mut self, input: &MouseInput) -> Result<(), DriverError> {
        self.ensure_open()?;
        self.write_frame(&encode_mouse(input))
    }

    /// Sends the given media key state. A press stays held until an empty
    /// [`MediaKeyInput`] is sent.
    ///
    /// # Errors
    ///
    /// See [`send_keyboard_input`](Self::send_keyboard_input).
    pub fn send_media_key_input(&mut self, input: &MediaKeyInput) -> Result<(), DriverError> {
        self.ensure_open()?;
        self.write_frame(&encode_media_key(input))
    }

    /// Sends a report of any kind.
    ///
    /// # Errors
    ///
    /// See [`send_keyboard_input`](Self::send_keyboard_input).
    pub fn send_report(&mut self, report: &HidReport) -> Result<(), DriverError> {
        self.ensure_open()?;
        self.write_frame(&encode_report(report))
    }

    /// Maps raw evdev codes and sends the resulting keyboard state.
    ///
    /// Unsupported codes and more than six keys are rejected before the
    /// transport is touched.
    ///
    /// # Errors
    ///
    /// [`DriverError::UnsupportedCode`], [`DriverError::Input`], or any
    /// error of [`send_keyboard_input`](Self::send_keyboard_input).
    pub fn send_evdev_keyboard(&mut self, keys: &[u16], modifiers: &[u16]) -> Result<(), DriverError> {
        let input = KeyboardInput::from_evdev(keys, modifiers)?;
        self.send_keyboard_input(&input)
    }

    /// Maps raw evdev codes and sends the resulting media key state.
    ///
    /// # Errors
    ///
    /// [`DriverError::UnsupportedCode`] or any error of
    /// [`send_media_key_input`](Self::send_media_key_input).
    pub fn send_evdev_media_keys(&mut self, keys: &[u16]) -> Result<(), DriverError> {
        let input = MediaKeyInput::from_evdev(keys)?;
        self.send_media_key_input(&input)
    }

    /// Sends the released state for the keyboard, the mouse, and the media
    /// keys, in that order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing write.
    pub fn release_all(&mut self) -> Result<(), DriverError> {
        self.send_keyboard_input(&KeyboardInput::default())?;
        self.send_mouse_input(&MouseInput::default())?;
        self.send_media_key_input(&MediaKeyInput::default())
    }

    /// Closes the transport. Calling this more than once is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Transport`] if the transport fails to close.
    /// The driver counts as closed either way.
    pub fn close(&mut self) -> Result<(), DriverError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.transport.close()?;
        info!("CH9329 transport closed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), DriverError> {
        if self.closed {
            Err(DriverError::Closed)
        } else {
            Ok(())
        }
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DriverError> {
        debug!(command = frame[3], len = frame.len(), bytes = %hex_string(frame), "sending frame");
        self.transport.write(frame)?;
        Ok(())
    }
}

impl<T: ByteTransport> Drop for Ch9329Driver<T> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "failed to close CH9329 transport on drop");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
