//! Key-signature staff layout
//!
//! Every spelling of the current key gets a treble staff followed by a bass
//! staff. C major still gets its two empty staves.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use crate::models::{
    accidental_glyph_positions, derive_key_signature, AccidentalKind, Clef, KeySignature, PitchClass,
};

/// Number of lines on a staff
pub const STAFF_LINES: usize = 5;

/// A positioned accidental glyph
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AccidentalGlyph {
    pub clef: Clef,
    pub kind: AccidentalKind,
    /// Vertical offset from the top staff line (em)
    pub offset: f32,
    /// Horizontal position (pixels)
    pub left: f32,
    pub glyph: char,
}

/// One staff with its clef and key signature
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderStaff {
    pub clef: Clef,
    pub signature: KeySignature,
    /// Top offset of each staff line (em)
    pub line_tops: Vec<f32>,
    pub clef_glyph: char,
    /// Clef top offset (em)
    pub clef_top: f32,
    pub accidentals: Vec<AccidentalGlyph>,
}

pub fn layout_staff(clef: Clef, signature: KeySignature, config: &LayoutConfig) -> RenderStaff {
    let accidentals = accidental_glyph_positions(clef, signature.kind, signature.count)
        .iter()
        .enumerate()
        .map(|(i, &offset)| AccidentalGlyph {
            clef,
            kind: signature.kind,
            offset,
            left: config.accidental_left + i as f32 * config.accidental_spacing,
            glyph: signature.kind.glyph(),
        })
        .collect();

    RenderStaff {
        clef,
        signature,
        line_tops: (0..STAFF_LINES)
            .map(|i| i as f32 * config.staff_line_spacing)
            .collect(),
        clef_glyph: clef.glyph(),
        clef_top: match clef {
            Clef::Treble => config.treble_clef_top,
            Clef::Bass => config.bass_clef_top,
        },
        accidentals,
    }
}

/// Treble and bass staves for every spelling of the key on `tonic`
pub fn layout_staves(tonic: PitchClass, config: &LayoutConfig) -> Vec<RenderStaff> {
    derive_key_signature(tonic)
        .iter()
        .flat_map(|&signature| Clef::ALL.map(|clef| layout_staff(clef, signature, config)))
        .collect()
}
