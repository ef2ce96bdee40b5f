//! `ByteTransport` implementations.
//!
//! | Type              | Backing                        | Used by                  |
//! |-------------------|--------------------------------|--------------------------|
//! | `SerialTransport` | UART via the `serialport` crate | the `ch9329` binary      |
//! | `MockTransport`   | in-memory frame recorder       | tests and `--dry-run`    |

pub mod mock;
pub mod serial;

pub use mock::{MockTransport, TransportRecord};
pub use serial::SerialTransport;
