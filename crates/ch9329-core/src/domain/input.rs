//! Input models: one complete desired input state per value.
//!
//! A model says "this is what should be pressed / moved right now". It is
//! built, handed to the encoder, and dropped. Nothing here remembers the
//! previous state, so callers that want press/release transitions send the
//! intermediate states themselves.
//!
//! Every invariant is checked in the constructor. Fields are private, so an
//! out-of-range or over-full model cannot be observed by the encoder.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::keymap::{
    EvdevIdentifier, KeyCode, MediaKey, ModifierKey, MouseButton, UnsupportedCodeError,
};

/// Boot-protocol keyboards report at most six non-modifier keys at once.
pub const MAX_PRESSED_KEYS: usize = 6;

/// Inclusive range of every relative mouse field (one two's-complement byte).
pub const MOUSE_DELTA_RANGE: std::ops::RangeInclusive<i32> = (i8::MIN as i32)..=(i8::MAX as i32);

/// A model invariant was violated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// More distinct keys than the keyboard report has slots for.
    #[error("{count} keys pressed at once, the chip reports at most {max}")]
    TooManyKeys { count: usize, max: usize },

    /// A relative mouse field does not fit in one signed byte.
    #[error(
        "{field} = {value} is outside the representable range {range:?}",
        range = MOUSE_DELTA_RANGE
    )]
    OutOfRange { field: &'static str, value: i32 },
}

/// Failure building a model from raw evdev codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error(transparent)]
    UnsupportedCode(#[from] UnsupportedCodeError),

    #[error(transparent)]
    Invalid(#[from] InputError),
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

/// Keys and modifiers held down on the emulated keyboard.
///
/// The default value is "nothing pressed" and doubles as the release report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct KeyboardInput {
    keys: BTreeSet<KeyCode>,
    modifiers: BTreeSet<ModifierKey>,
}

impl KeyboardInput {
    /// Builds a keyboard state. Duplicate keys collapse.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooManyKeys`] when more than
    /// [`MAX_PRESSED_KEYS`] distinct keys are given. Keys are never dropped
    /// silently.
    pub fn new(
        keys: impl IntoIterator<Item = KeyCode>,
        modifiers: impl IntoIterator<Item = ModifierKey>,
    ) -> Result<Self, InputError> {
        let keys: BTreeSet<KeyCode> = keys.into_iter().collect();
        if keys.len() > MAX_PRESSED_KEYS {
            return Err(InputError::TooManyKeys {
                count: keys.len(),
                max: MAX_PRESSED_KEYS,
            });
        }
        Ok(Self {
            keys,
            modifiers: modifiers.into_iter().collect(),
        })
    }

    /// Builds a keyboard state from raw evdev key codes.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnsupportedCode`] for the first code without a chip
    /// mapping, otherwise the errors of [`KeyboardInput::new`].
    pub fn from_evdev(keys: &[u16], modifiers: &[u16]) -> Result<Self, ModelError> {
        let keys = keys
            .iter()
            .map(|&c| KeyCode::from_evdev(c))
            .collect::<Result<Vec<_>, _>>()?;
        let modifiers = modifiers
            .iter()
            .map(|&c| ModifierKey::from_evdev(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(keys, modifiers)?)
    }

    /// Pressed keys in ascending usage order.
    pub fn keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }

    /// Held modifiers.
    pub fn modifiers(&self) -> impl Iterator<Item = ModifierKey> + '_ {
        self.modifiers.iter().copied()
    }

    /// The modifier byte: one bit per held modifier.
    pub fn modifier_mask(&self) -> u8 {
        self.modifiers.iter().fold(0, |acc, m| acc | m.mask())
    }
}

// ── Mouse ─────────────────────────────────────────────────────────────────────

/// Relative mouse report: held buttons plus movement since the last report.
///
/// The default value releases every button and does not move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MouseInput {
    buttons: BTreeSet<MouseButton>,
    x: i8,
    y: i8,
    scroll: i8,
}

impl MouseInput {
    /// Builds a relative mouse state.
    ///
    /// Positive `x` moves right, positive `y` moves down, positive `scroll`
    /// scrolls up.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] naming the first field outside
    /// `-128..=127`. Values are never clamped or wrapped.
    pub fn new(
        buttons: impl IntoIterator<Item = MouseButton>,
        x: i32,
        y: i32,
        scroll: i32,
    ) -> Result<Self, InputError> {
        Ok(Self {
            buttons: buttons.into_iter().collect(),
            x: to_delta("x", x)?,
            y: to_delta("y", y)?,
            scroll: to_delta("scroll", scroll)?,
        })
    }

    /// Pure movement with no button held.
    ///
    /// # Errors
    ///
    /// See [`MouseInput::new`].
    pub fn movement(x: i32, y: i32) -> Result<Self, InputError> {
        Self::new([], x, y, 0)
    }

    /// Buttons held, nothing moved.
    pub fn buttons_only(buttons: impl IntoIterator<Item = MouseButton>) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Held buttons.
    pub fn buttons(&self) -> impl Iterator<Item = MouseButton> + '_ {
        self.buttons.iter().copied()
    }

    /// The button byte: one bit per held button.
    pub fn button_mask(&self) -> u8 {
        self.buttons.iter().fold(0, |acc, b| acc | b.mask())
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn scroll(&self) -> i8 {
        self.scroll
    }
}

fn to_delta(field: &'static str, value: i32) -> Result<i8, InputError> {
    if !MOUSE_DELTA_RANGE.contains(&value) {
        return Err(InputError::OutOfRange { field, value });
    }
    Ok(value as i8)
}

// ── Media keys ────────────────────────────────────────────────────────────────

/// Media keys held down.
///
/// The chip never releases a media key on its own: after sending a press,
/// callers must send [`MediaKeyInput::default`] to release it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MediaKeyInput {
    keys: BTreeSet<MediaKey>,
}

impl MediaKeyInput {
    /// Every combination of media keys fits the single data byte, so this
    /// cannot fail.
    pub fn new(keys: impl IntoIterator<Item = MediaKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Builds a media state from raw evdev codes.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCodeError`] for the first code without a chip
    /// mapping.
    pub fn from_evdev(keys: &[u16]) -> Result<Self, UnsupportedCodeError> {
        let keys = keys
            .iter()
            .map(|&c| MediaKey::from_evdev(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(keys))
    }

    pub fn keys(&self) -> impl Iterator<Item = MediaKey> + '_ {
        self.keys.iter().copied()
    }

    /// The media bitmask byte.
    pub fn key_mask(&self) -> u8 {
        self.keys.iter().fold(0, |acc, k| acc | k.mask())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_duplicates_collapse() {
        // Arrange / Act
        let input = KeyboardInput::new(
            [KeyCode::KeyA, KeyCode::KeyA, KeyCode::KeyB],
            [ModifierKey::LeftCtrl, ModifierKey::LeftCtrl],
        )
        .unwrap();

        // Assert
        assert_eq!(input.keys().collect::<Vec<_>>(), vec![KeyCode::KeyA, KeyCode::KeyB]);
        assert_eq!(input.modifier_mask(), 0x01);
    }

    #[test]
    fn test_keyboard_accepts_exactly_six_keys() {
        let keys = [
            KeyCode::KeyA,
            KeyCode::KeyB,
            KeyCode::KeyC,
            KeyCode::KeyD,
            KeyCode::KeyE,
            KeyCode::KeyF,
        ];
        assert!(KeyboardInput::new(keys, []).is_ok());
    }

    #[test]
    fn test_keyboard_rejects_seven_keys() {
        let keys = [
            KeyCode::KeyA,
            KeyCode::KeyB,
            KeyCode::KeyC,
            KeyCode::KeyD,
            KeyCode::KeyE,
            KeyCode::KeyF,
            KeyCode::KeyG,
        ];
        assert_eq!(
            KeyboardInput::new(keys, []),
            Err(InputError::TooManyKeys { count: 7, max: 6 })
        );
    }

    #[test]
    fn test_seven_entries_with_a_duplicate_are_six_keys() {
        let keys = [
            KeyCode::KeyA,
            KeyCode::KeyB,
            KeyCode::KeyC,
            KeyCode::KeyD,
            KeyCode::KeyE,
            KeyCode::KeyF,
            KeyCode::KeyA,
        ];
        assert!(KeyboardInput::new(keys, []).is_ok());
    }

    #[test]
    fn test_modifiers_do_not_count_towards_key_limit() {
        let input = KeyboardInput::new(
            [KeyCode::KeyA],
            ModifierKey::ALL.iter().copied(),
        )
        .unwrap();
        assert_eq!(input.modifier_mask(), 0xFF);
    }

    #[test]
    fn test_keyboard_default_holds_nothing() {
        let input = KeyboardInput::default();
        assert_eq!(input.keys().count(), 0);
        assert_eq!(input.modifier_mask(), 0);
        assert_eq!(KeyboardInput::new([], []).unwrap(), KeyboardInput::default());
    }

    #[test]
    fn test_keyboard_from_evdev_maps_codes() {
        // KEY_H, KEY_I with KEY_LEFTSHIFT
        let input = KeyboardInput::from_evdev(&[35, 23], &[42]).unwrap();
        assert_eq!(
            input,
            KeyboardInput::new([KeyCode::KeyH, KeyCode::KeyI], [ModifierKey::LeftShift]).unwrap()
        );
    }

    #[test]
    fn test_keyboard_from_evdev_reports_unsupported_code() {
        // KEY_F13
        assert_eq!(
            KeyboardInput::from_evdev(&[30, 183], &[]),
            Err(ModelError::UnsupportedCode(UnsupportedCodeError { code: 183 }))
        );
    }

    #[test]
    fn test_keyboard_from_evdev_rejects_modifier_in_key_list() {
        // KEY_LEFTCTRL belongs in the modifier list
        assert!(matches!(
            KeyboardInput::from_evdev(&[29], &[]),
            Err(ModelError::UnsupportedCode(_))
        ));
    }

    #[test]
    fn test_mouse_accepts_byte_bounds() {
        let input = MouseInput::new([], -128, 127, -128).unwrap();
        assert_eq!((input.x(), input.y(), input.scroll()), (-128, 127, -128));
    }

    #[test]
    fn test_mouse_rejects_each_out_of_range_field() {
        assert_eq!(
            MouseInput::new([], 128, 0, 0),
            Err(InputError::OutOfRange { field: "x", value: 128 })
        );
        assert_eq!(
            MouseInput::new([], 0, -129, 0),
            Err(InputError::OutOfRange { field: "y", value: -129 })
        );
        assert_eq!(
            MouseInput::new([], 0, 0, 1000),
            Err(InputError::OutOfRange { field: "scroll", value: 1000 })
        );
    }

    #[test]
    fn test_mouse_delta_range_bounds_every_field() {
        let (lo, hi) = (*MOUSE_DELTA_RANGE.start(), *MOUSE_DELTA_RANGE.end());

        let input = MouseInput::new([], lo, hi, hi).unwrap();
        assert_eq!((input.x(), input.y(), input.scroll()), (i8::MIN, i8::MAX, i8::MAX));
        assert!(MouseInput::new([], lo - 1, 0, 0).is_err());
        assert!(MouseInput::new([], 0, hi + 1, 0).is_err());
        assert!(MouseInput::new([], 0, 0, lo - 1).is_err());
    }

    #[test]
    fn test_out_of_range_message_names_field_and_range() {
        let err = MouseInput::new([], 0, 200, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "y = 200 is outside the representable range -128..=127"
        );
    }

    #[test]
    fn test_models_serialize_with_evdev_names() {
        #[derive(serde::Serialize)]
        struct Press {
            keyboard: KeyboardInput,
            mouse: MouseInput,
            media: MediaKeyInput,
        }
        let press = Press {
            keyboard: KeyboardInput::new([KeyCode::KeyH], [ModifierKey::LeftShift]).unwrap(),
            mouse: MouseInput::new([MouseButton::Right], -3, 4, 0).unwrap(),
            media: MediaKeyInput::new([MediaKey::Mute]),
        };

        let text = toml::to_string(&press).expect("serialize");

        assert!(text.contains(r#"keys = ["KEY_H"]"#), "{text}");
        assert!(text.contains(r#"modifiers = ["KEY_LEFTSHIFT"]"#), "{text}");
        assert!(text.contains(r#"buttons = ["BTN_RIGHT"]"#), "{text}");
        assert!(text.contains("x = -3"), "{text}");
        assert!(text.contains(r#"keys = ["KEY_MUTE"]"#), "{text}");
    }

    #[test]
    fn test_mouse_button_mask() {
        let input = MouseInput::buttons_only([MouseButton::Left, MouseButton::Middle]);
        assert_eq!(input.button_mask(), 0b101);
        assert_eq!((input.x(), input.y(), input.scroll()), (0, 0, 0));
    }

    #[test]
    fn test_mouse_value_equality() {
        assert_eq!(MouseInput::movement(10, 10).unwrap(), MouseInput::new([], 10, 10, 0).unwrap());
        assert_ne!(MouseInput::movement(10, 10).unwrap(), MouseInput::movement(-10, -10).unwrap());
    }

    #[test]
    fn test_media_mask_and_from_evdev() {
        let input = MediaKeyInput::from_evdev(&[113, 115]).unwrap();
        assert_eq!(input.key_mask(), MediaKey::Mute.mask() | MediaKey::VolumeUp.mask());
        assert_eq!(MediaKeyInput::from_evdev(&[1]), Err(UnsupportedCodeError { code: 1 }));
    }

    #[test]
    fn test_media_default_is_empty() {
        assert_eq!(MediaKeyInput::default().key_mask(), 0);
        assert_eq!(MediaKeyInput::new([]), MediaKeyInput::default());
    }
}
