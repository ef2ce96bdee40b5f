//! In-memory transport that records frames instead of writing them.
//!
//! # Why a recording transport?
//!
//! The serial transport needs a CH9329 on a real UART, and whatever it writes
//! shows up as keystrokes on whichever machine the chip is plugged into.
//! `MockTransport` keeps every written frame in memory so tests can assert on
//! exact bytes, and the `ch9329 --dry-run` mode can print them.
//!
//! # Shared record
//!
//! The driver takes ownership of its transport. Clones of a `MockTransport`
//! share one [`TransportRecord`], so a test keeps a clone and inspects it
//! after the driver has been dropped:
//!
//! ```
//! use ch9329_core::KeyboardInput;
//! use ch9329_driver::{Ch9329Driver, MockTransport};
//!
//! let transport = MockTransport::new();
//! let handle = transport.clone();
//! {
//!     let mut driver = Ch9329Driver::new(transport).unwrap();
//!     driver.send_keyboard_input(&KeyboardInput::default()).unwrap();
//! }
//! assert_eq!(handle.frames().len(), 1);
//! assert_eq!(handle.close_calls(), 1);
//! ```
//!
//! # Failure injection
//!
//! [`MockTransport::fail_open`] and [`MockTransport::fail_writes`] make the
//! next calls return an I/O error, to exercise error paths in callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::driver::{ByteTransport, TransportError};

/// Everything a [`MockTransport`] observed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransportRecord {
    /// Each successful `write`, in order.
    pub frames: Vec<Vec<u8>>,
    /// Number of `open` calls, including no-op ones.
    pub open_calls: usize,
    /// Number of `close` calls, including no-op ones.
    pub close_calls: usize,
    /// Number of `write` calls that were rejected.
    pub failed_writes: usize,
    pub is_open: bool,
    pub fail_open: bool,
    pub fail_writes: bool,
}

/// A [`ByteTransport`] that records instead of transmitting.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    record: Arc<Mutex<TransportRecord>>,
}

impl MockTransport {
    /// Creates a closed transport with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `open` calls fail.
    pub fn fail_open(&self, fail: bool) {
        self.lock().fail_open = fail;
    }

    /// Makes subsequent `write` calls fail without recording the frame.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Frames written so far.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.lock().frames.clone()
    }

    pub fn open_calls(&self) -> usize {
        self.lock().open_calls
    }

    pub fn close_calls(&self) -> usize {
        self.lock().close_calls
    }

    /// A copy of the full record.
    pub fn snapshot(&self) -> TransportRecord {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, TransportRecord> {
        // Poisoning is ignored; the record stays readable after a panic.
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn injected(what: &str) -> TransportError {
    TransportError::Io(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        format!("injected {what} failure"),
    ))
}

impl ByteTransport for MockTransport {
    fn open(&mut self) -> Result<(), TransportError> {
        let mut record = self.lock();
        record.open_calls += 1;
        if record.fail_open {
            return Err(injected("open"));
        }
        record.is_open = true;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let mut record = self.lock();
        if !record.is_open {
            return Err(TransportError::NotOpen);
        }
        if record.fail_writes {
            record.failed_writes += 1;
            return Err(injected("write"));
        }
        record.frames.push(bytes.to_vec());
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        let mut record = self.lock();
        record.close_calls += 1;
        record.is_open = false;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.lock().is_open
    }
}
