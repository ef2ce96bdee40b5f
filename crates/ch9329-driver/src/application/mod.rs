//! Application layer of the driver.
//!
//! - **`driver`** – Encodes input models and pushes each frame through a
//!   `ByteTransport` injected at construction time. Owns the transport for
//!   its whole lifetime and closes it on drop.

pub mod driver;
