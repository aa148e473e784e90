//! Key signatures and accidental stacking positions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::pitch_class::PitchClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalKind {
    Sharp,
    Flat,
}

impl AccidentalKind {
    /// SMuFL glyph for this accidental
    pub fn glyph(self) -> char {
        match self {
            AccidentalKind::Sharp => '\u{E262}',
            AccidentalKind::Flat => '\u{E260}',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccidentalKind::Sharp => "sharps",
            AccidentalKind::Flat => "flats",
        }
    }
}

impl fmt::Display for AccidentalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    pub const ALL: [Clef; 2] = [Clef::Treble, Clef::Bass];

    /// SMuFL glyph for this clef
    pub fn glyph(self) -> char {
        match self {
            Clef::Treble => '\u{E050}',
            Clef::Bass => '\u{E062}',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
        }
    }
}

/// One spelling of a major key's signature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySignature {
    pub kind: AccidentalKind,
    pub count: u8,
}

impl KeySignature {
    pub const fn sharps(count: u8) -> Self {
        Self { kind: AccidentalKind::Sharp, count }
    }

    pub const fn flats(count: u8) -> Self {
        Self { kind: AccidentalKind::Flat, count }
    }
}

/// Signature variants per pitch class. Sharp spelling always comes first.
/// B, F♯ and C♯ are the enharmonic pivots and carry both spellings.
pub const KEY_SIGNATURES: [&[KeySignature]; 12] = [
    &[KeySignature::sharps(0)],                          // C
    &[KeySignature::sharps(7), KeySignature::flats(5)], // C♯ / D♭
    &[KeySignature::sharps(2)],                          // D
    &[KeySignature::flats(3)],                           // E♭
    &[KeySignature::sharps(4)],                          // E
    &[KeySignature::flats(1)],                           // F
    &[KeySignature::sharps(6), KeySignature::flats(6)], // F♯ / G♭
    &[KeySignature::sharps(1)],                          // G
    &[KeySignature::flats(4)],                           // A♭
    &[KeySignature::sharps(3)],                          // A
    &[KeySignature::flats(2)],                           // B♭
    &[KeySignature::sharps(5), KeySignature::flats(7)], // B / C♭
];

// Vertical offsets in em from the top staff line, in the order accidentals
// are added: F C G D A E B for sharps, B E A D G C F for flats.
const TREBLE_SHARPS: [f32; 7] = [0.0, 2.5, -0.5, 2.0, 3.5, 1.5, 3.0];
const TREBLE_FLATS: [f32; 7] = [2.0, 0.5, 2.5, 1.0, 3.0, 1.5, 3.5];
const BASS_SHARPS: [f32; 7] = [2.0, 0.5, 2.5, 1.0, 3.5, 1.5, 3.0];
const BASS_FLATS: [f32; 7] = [1.0, 2.5, 0.5, 2.0, 3.5, 1.5, 3.0];

/// Full stacking table for a clef and accidental kind
pub fn accidental_positions(clef: Clef, kind: AccidentalKind) -> &'static [f32; 7] {
    match (clef, kind) {
        (Clef::Treble, AccidentalKind::Sharp) => &TREBLE_SHARPS,
        (Clef::Treble, AccidentalKind::Flat) => &TREBLE_FLATS,
        (Clef::Bass, AccidentalKind::Sharp) => &BASS_SHARPS,
        (Clef::Bass, AccidentalKind::Flat) => &BASS_FLATS,
    }
}

/// Signature variants for a major key
pub fn derive_key_signature(pc: PitchClass) -> &'static [KeySignature] {
    KEY_SIGNATURES[pc.index()]
}

/// Vertical offsets of the first `count` accidentals (count is clamped to 7)
pub fn accidental_glyph_positions(clef: Clef, kind: AccidentalKind, count: u8) -> &'static [f32] {
    let count = (count as usize).min(7);
    &accidental_positions(clef, kind)[..count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_keys_have_two_spellings() {
        assert_eq!(
            derive_key_signature(PitchClass::Fs),
            &[KeySignature::sharps(6), KeySignature::flats(6)]
        );
        assert_eq!(
            derive_key_signature(PitchClass::B),
            &[KeySignature::sharps(5), KeySignature::flats(7)]
        );
        assert_eq!(
            derive_key_signature(PitchClass::Cs),
            &[KeySignature::sharps(7), KeySignature::flats(5)]
        );
    }

    #[test]
    fn test_ordinary_keys_have_one_spelling() {
        let pivots = [PitchClass::Cs, PitchClass::Fs, PitchClass::B];
        for pc in PitchClass::ALL.iter().filter(|pc| !pivots.contains(pc)) {
            assert_eq!(derive_key_signature(*pc).len(), 1, "pitch class {}", pc);
        }
    }

    #[test]
    fn test_c_major_has_no_accidentals() {
        let sig = derive_key_signature(PitchClass::C);
        assert_eq!(sig, &[KeySignature::sharps(0)]);
        assert!(accidental_glyph_positions(Clef::Treble, sig[0].kind, sig[0].count).is_empty());
    }

    #[test]
    fn test_glyph_positions_are_a_prefix() {
        assert_eq!(
            accidental_glyph_positions(Clef::Treble, AccidentalKind::Sharp, 3),
            &[0.0, 2.5, -0.5]
        );
        assert_eq!(
            accidental_glyph_positions(Clef::Bass, AccidentalKind::Flat, 2),
            &[1.0, 2.5]
        );
        assert_eq!(accidental_glyph_positions(Clef::Bass, AccidentalKind::Sharp, 9).len(), 7);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&KeySignature::flats(3)).unwrap();
        assert_eq!(json, r#"{"kind":"flat","count":3}"#);
        assert_eq!(serde_json::to_string(&Clef::Bass).unwrap(), "\"bass\"");
    }
}
