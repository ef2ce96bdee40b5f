//! Serial port transport.
//!
//! The CH9329 ships configured for 9600 baud, 8 data bits, no parity, one
//! stop bit and no flow control. The baud rate can be changed on the chip
//! with WCH's configuration tool, so it is taken from [`SerialSettings`];
//! the framing is fixed.

use std::io::Write;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::debug;

use crate::application::driver::{ByteTransport, TransportError};
use crate::infrastructure::storage::config::SerialSettings;

/// [`ByteTransport`] over a UART device such as `/dev/ttyUSB0` or `COM3`.
///
/// The device is opened lazily by [`ByteTransport::open`] and released by
/// [`ByteTransport::close`] or when the transport is dropped.
pub struct SerialTransport {
    settings: SerialSettings,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Creates a closed transport for the given device settings.
    pub fn new(settings: SerialSettings) -> Self {
        Self {
            settings,
            port: None,
        }
    }

    pub fn settings(&self) -> &SerialSettings {
        &self.settings
    }
}

impl ByteTransport for SerialTransport {
    fn open(&mut self) -> Result<(), TransportError> {
        if self.port.is_some() {
            return Ok(());
        }
        debug!(
            port = %self.settings.port,
            baud = self.settings.baud_rate,
            timeout_ms = self.settings.timeout_ms,
            "opening serial port"
        );
        let port = serialport::new(self.settings.port.as_str(), self.settings.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(self.settings.timeout())
            .open()?;
        self.port = Some(port);
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let port = self.port.as_mut().ok_or(TransportError::NotOpen)?;
        port.write_all(bytes)?;
        port.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        if self.port.take().is_some() {
            debug!(port = %self.settings.port, "serial port released");
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }
}
