//! Consumer-control (media) keys and their bits in the media frame.
//!
//! The CH9329 media report (report id `0x02`) carries three bitmask bytes.
//! Every key supported here lives in the first one:
//!
//! | Bit | Action          | evdev name         |
//! |-----|-----------------|--------------------|
//! | 0   | Volume up       | `KEY_VOLUMEUP`     |
//! | 1   | Volume down     | `KEY_VOLUMEDOWN`   |
//! | 2   | Mute            | `KEY_MUTE`         |
//! | 3   | Play / pause    | `KEY_PLAYPAUSE`    |
//! | 4   | Next track      | `KEY_NEXTSONG`     |
//! | 5   | Previous track  | `KEY_PREVIOUSSONG` |
//! | 6   | Stop            | `KEY_STOPCD`       |
//! | 7   | Eject           | `KEY_EJECTCD`      |

use super::EvdevIdentifier;

/// A media key, carried as one bit of the first media data byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MediaKey {
    VolumeUp = 0,
    VolumeDown = 1,
    Mute = 2,
    PlayPause = 3,
    NextTrack = 4,
    PreviousTrack = 5,
    Stop = 6,
    Eject = 7,
}

impl MediaKey {
    /// Bit position within the media bitmask byte.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this key.
    pub fn mask(self) -> u8 {
        1 << self.bit()
    }
}

impl EvdevIdentifier for MediaKey {
    const ALL: &'static [Self] = &[
        MediaKey::VolumeUp,
        MediaKey::VolumeDown,
        MediaKey::Mute,
        MediaKey::PlayPause,
        MediaKey::NextTrack,
        MediaKey::PreviousTrack,
        MediaKey::Stop,
        MediaKey::Eject,
    ];

    fn evdev_entry(self) -> (u16, &'static str) {
        match self {
            MediaKey::VolumeUp => (115, "KEY_VOLUMEUP"),
            MediaKey::VolumeDown => (114, "KEY_VOLUMEDOWN"),
            MediaKey::Mute => (113, "KEY_MUTE"),
            MediaKey::PlayPause => (164, "KEY_PLAYPAUSE"),
            MediaKey::NextTrack => (163, "KEY_NEXTSONG"),
            MediaKey::PreviousTrack => (165, "KEY_PREVIOUSSONG"),
            MediaKey::Stop => (166, "KEY_STOPCD"),
            MediaKey::Eject => (161, "KEY_EJECTCD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_keys_fill_exactly_one_byte() {
        let combined = MediaKey::ALL.iter().fold(0u8, |acc, k| {
            assert_eq!(acc & k.mask(), 0, "{k:?} overlaps another media key");
            acc | k.mask()
        });
        assert_eq!(combined, 0xFF);
    }

    #[test]
    fn test_mute_is_bit_two() {
        assert_eq!(MediaKey::Mute.mask(), 0x04);
    }

    #[test]
    fn test_unsupported_consumer_codes() {
        // KEY_PLAYCD, KEY_BRIGHTNESSUP
        assert!(MediaKey::from_evdev(200).is_err());
        assert!(MediaKey::from_evdev(225).is_err());
        assert_eq!(MediaKey::from_evdev(113), Ok(MediaKey::Mute));
    }
}
