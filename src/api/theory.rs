//! Stateless lookups exposed to JavaScript

use wasm_bindgen::prelude::*;

use super::helpers::{pitch_class_from_js, serialize, wheel_error};
use crate::errors::WheelError;
use crate::layout::derive_scale_highlights;
use crate::models::{
    accidental_glyph_positions, derive_key_signature, AccidentalKind, Clef, Keyboard, PitchClass,
};

/// Key-signature spellings for a major key, e.g. `[{kind: "sharp", count: 6}, {kind: "flat", count: 6}]`
#[wasm_bindgen(js_name = keySignatureFor)]
pub fn key_signature_for(pitch_class: i32) -> Result<JsValue, JsValue> {
    let pc = pitch_class_from_js(pitch_class)?;
    serialize(&derive_key_signature(pc), "Failed to serialize key signature")
}

/// Highlighted keys for a major scale on the default two-octave keyboard
#[wasm_bindgen(js_name = scaleHighlightsFor)]
pub fn scale_highlights_for(pitch_class: i32) -> Result<JsValue, JsValue> {
    let pc = pitch_class_from_js(pitch_class)?;
    let highlights = derive_scale_highlights(pc, &Keyboard::default());
    serialize(&highlights, "Failed to serialize scale highlights")
}

/// Vertical offsets (em) of the first `count` accidentals on a staff
#[wasm_bindgen(js_name = accidentalPositions)]
pub fn accidental_positions_for(clef: &str, kind: &str, count: u8) -> Result<Vec<f32>, JsValue> {
    let clef = match clef {
        "treble" => Clef::Treble,
        "bass" => Clef::Bass,
        other => return Err(wheel_error(WheelError::Config(format!("unknown clef '{}'", other)))),
    };
    let kind = match kind {
        "sharp" | "sharps" => AccidentalKind::Sharp,
        "flat" | "flats" => AccidentalKind::Flat,
        other => {
            return Err(wheel_error(WheelError::Config(format!(
                "unknown accidental kind '{}'",
                other
            ))))
        }
    };
    Ok(accidental_glyph_positions(clef, kind, count).to_vec())
}

/// Parse a note name ("F#", "Gb", "B♭") into a pitch class
#[wasm_bindgen(js_name = parsePitchClass)]
pub fn parse_pitch_class(name: &str) -> Result<u8, JsValue> {
    name.parse::<PitchClass>()
        .map(|pc| pc as u8)
        .map_err(wheel_error)
}
