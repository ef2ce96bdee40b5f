//! Code tables for every identifier the CH9329 firmware understands.
//!
//! Each closed identifier set is a Rust enum whose protocol code is fixed by
//! an exhaustive `match`. The tables are read-only program data: they need no
//! initialisation, are never mutated, and can be shared between threads
//! without locking.
//!
//! Identifiers are named after their Linux evdev counterparts
//! (`linux/input-event-codes.h`). Evdev is a much larger key space than the
//! chip supports, so converting a raw evdev code is fallible and reports
//! [`UnsupportedCodeError`].
//!
//! With serde, identifiers are written as their evdev names (`"KEY_A"`,
//! `"BTN_LEFT"`) and read back through [`EvdevIdentifier::from_name`].

pub mod hid;
pub mod media;
pub mod modifier;
pub mod mouse;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub use hid::KeyCode;
pub use media::MediaKey;
pub use modifier::ModifierKey;
pub use mouse::MouseButton;

/// A raw evdev code has no mapping in the CH9329 code tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("evdev code {code} is not supported by CH9329")]
pub struct UnsupportedCodeError {
    /// The offending evdev code.
    pub code: u16,
}

/// Common surface of the four identifier tables.
///
/// Implementors only describe their variants and the evdev row of each one;
/// the reverse lookups are shared.
pub trait EvdevIdentifier: Copy + 'static {
    /// Every variant, in table order.
    const ALL: &'static [Self];

    /// The `(evdev code, evdev name)` pair for this identifier.
    fn evdev_entry(self) -> (u16, &'static str);

    /// Linux evdev code, e.g. `30` for `KEY_A`.
    fn evdev_code(self) -> u16 {
        self.evdev_entry().0
    }

    /// Linux evdev name, e.g. `"KEY_A"`.
    fn name(self) -> &'static str {
        self.evdev_entry().1
    }

    /// Maps a raw evdev code onto this table.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCodeError`] when the chip has no mapping for `code`.
    fn from_evdev(code: u16) -> Result<Self, UnsupportedCodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.evdev_code() == code)
            .ok_or(UnsupportedCodeError { code })
    }

    /// Looks up an evdev name such as `"KEY_A"`, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

macro_rules! serde_by_evdev_name {
    ($($ty:ty),+ $(,)?) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                <$ty as EvdevIdentifier>::from_name(&name).ok_or_else(|| {
                    de::Error::custom(format!(
                        "{name:?} is not a {} evdev name",
                        stringify!($ty)
                    ))
                })
            }
        }
    )+};
}

serde_by_evdev_name!(KeyCode, ModifierKey, MouseButton, MediaKey);
