//! Pitch classes and their fixed spellings
//!
//! A pitch class is one of the 12 semitones under octave equivalence,
//! indexed 0 (C) through 11 (B). Three spelling tables hang off it:
//! - `display_name`: enharmonic label for dial rings ("C♯/D♭")
//! - `sharp_name`: sharp-only ASCII name used for keyboard key ids ("C#")
//! - `key_display_name`: key label for the centre of the dials ("B / C♭")

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

use crate::errors::WheelError;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
pub enum PitchClass {
    #[default]
    C = 0,
    Cs = 1,
    D = 2,
    Ds = 3,
    E = 4,
    F = 5,
    Fs = 6,
    G = 7,
    Gs = 8,
    A = 9,
    As = 10,
    B = 11,
}

/// Display labels for the outer dial rings, indexed by pitch class
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E", "F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

/// Sharp-only names, indexed by pitch class; these form the keyboard key ids
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Key labels shown in the centre of both dials
///
/// The 15 major keys a key signature can express collapse onto 12 labels;
/// B doubles as C♭.
pub const KEY_DISPLAY_NAMES: [&str; 12] = [
    "C", "C♯ / D♭", "D", "D♯ / E♭", "E", "F", "F♯ / G♭", "G", "G♯ / A♭", "A", "A♯ / B♭", "B / C♭",
];

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Build from an index that is already known to be in 0..=11
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Validate a raw number coming from outside the crate
    pub fn try_from_raw(raw: i64) -> Result<Self, WheelError> {
        usize::try_from(raw)
            .ok()
            .and_then(Self::from_index)
            .ok_or(WheelError::InvalidPitchClass(raw))
    }

    /// Reduce any integer into a pitch class (mod 12, always non-negative)
    pub fn wrapping(value: i64) -> Self {
        Self::ALL[value.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Transpose by a signed number of semitones, wrapping around the octave
    pub fn transpose(self, semitones: i64) -> Self {
        Self::wrapping(self as i64 + semitones)
    }

    pub fn display_name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.index()]
    }

    pub fn key_display_name(self) -> &'static str {
        KEY_DISPLAY_NAMES[self.index()]
    }

    /// True for the five pitch classes that sit on black piano keys
    pub fn is_black_key(self) -> bool {
        matches!(
            self,
            PitchClass::Cs | PitchClass::Ds | PitchClass::Fs | PitchClass::Gs | PitchClass::As
        )
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sharp_name())
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = WheelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_raw(value as i64)
    }
}

impl FromStr for PitchClass {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive, ASCII or Unicode accidentals
        let index = match s.trim().to_uppercase().as_str() {
            "C" | "B#" | "B♯" => 0,
            "C#" | "C♯" | "DB" | "D♭" => 1,
            "D" => 2,
            "D#" | "D♯" | "EB" | "E♭" => 3,
            "E" | "FB" | "F♭" => 4,
            "F" | "E#" | "E♯" => 5,
            "F#" | "F♯" | "GB" | "G♭" => 6,
            "G" => 7,
            "G#" | "G♯" | "AB" | "A♭" => 8,
            "A" => 9,
            "A#" | "A♯" | "BB" | "B♭" => 10,
            "B" | "CB" | "C♭" => 11,
            _ => return Err(WheelError::UnknownNoteName(s.to_string())),
        };
        Ok(Self::ALL[index])
    }
}
