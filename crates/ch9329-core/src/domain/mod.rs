//! Domain layer: hardware-agnostic input state models.
//!
//! Models describe what should currently be pressed or moved. They know
//! nothing about frames, checksums, or command ids; that is the job of
//! [`crate::protocol`].

pub mod input;

pub use input::{InputError, KeyboardInput, MediaKeyInput, ModelError, MouseInput};
