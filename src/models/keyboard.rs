//! Piano keyboard model
//!
//! The rendered keyboard is a strip of whole octaves. Keys are identified by
//! their sharp name, with the octave number appended from the second octave
//! on: "C", "C#", ... "B", then "C2", "C#2", ... "B2".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::pitch_class::PitchClass;

/// Identity of one key on the rendered keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyId {
    pub pitch_class: PitchClass,
    /// 1-based octave within the rendered strip
    pub octave: u8,
}

impl KeyId {
    pub fn new(pitch_class: PitchClass, octave: u8) -> Self {
        Self { pitch_class, octave }
    }

    /// The `data-note` string used to match DOM keys
    pub fn data_note(&self) -> String {
        if self.octave == 1 {
            self.pitch_class.sharp_name().to_string()
        } else {
            format!("{}{}", self.pitch_class.sharp_name(), self.octave)
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_note())
    }
}

/// A key as laid out on the strip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PianoKey {
    pub id: KeyId,
    pub is_black: bool,
    /// Letter printed on the key; only first-octave white keys carry one
    pub label: Option<String>,
}

/// The set of keys that exist as render targets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyboard {
    keys: Vec<PianoKey>,
}

impl Keyboard {
    /// Strip of `octaves` whole octaves starting at C
    pub fn with_octaves(octaves: u8) -> Self {
        let keys = (1..=octaves)
            .flat_map(|octave| {
                PitchClass::ALL.into_iter().map(move |pc| {
                    let is_black = pc.is_black_key();
                    PianoKey {
                        id: KeyId::new(pc, octave),
                        is_black,
                        label: (!is_black && octave == 1).then(|| pc.sharp_name().to_string()),
                    }
                })
            })
            .collect();
        Self { keys }
    }

    /// Keyboard built from an explicit list of key ids. Octaves count from 1;
    /// ids with octave 0 are dropped.
    pub fn from_ids(ids: impl IntoIterator<Item = KeyId>) -> Self {
        let keys = ids
            .into_iter()
            .filter(|id| {
                if id.octave == 0 {
                    log::warn!("key {:?} has octave 0, skipped", id.pitch_class);
                }
                id.octave > 0
            })
            .map(|id| PianoKey {
                id,
                is_black: id.pitch_class.is_black_key(),
                label: None,
            })
            .collect();
        Self { keys }
    }

    pub fn keys(&self) -> &[PianoKey] {
        &self.keys
    }

    pub fn contains(&self, id: KeyId) -> bool {
        self.keys.iter().any(|key| key.id == id)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::with_octaves(2)
    }
}
