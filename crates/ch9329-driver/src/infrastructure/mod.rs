//! Infrastructure layer for the driver.
//!
//! - `transport` – `ByteTransport` implementations: the serial port used in
//!   production and an in-memory recorder for tests and dry runs.
//! - `storage` – TOML configuration file.

pub mod storage;
pub mod transport;
