// Scale highlights and key signatures for every major key

use keywheel_wasm::layout::{derive_scale_highlights, layout_staves, LayoutConfig};
use keywheel_wasm::models::{
    accidental_glyph_positions, derive_key_signature, AccidentalKind, Clef, KeyId, KeySignature,
    Keyboard, PitchClass, MAJOR_SCALE_INTERVALS,
};

fn ids(tonic: PitchClass) -> Vec<(usize, u8, u8)> {
    derive_scale_highlights(tonic, &Keyboard::default())
        .iter()
        .map(|h| (h.key.pitch_class.index(), h.key.octave, h.degree))
        .collect()
}

#[test]
fn test_c_major_highlights() {
    assert_eq!(
        ids(PitchClass::C),
        vec![(0, 1, 1), (2, 1, 2), (4, 1, 3), (5, 1, 4), (7, 1, 5), (9, 1, 6), (11, 1, 7)]
    );
}

#[test]
fn test_b_major_uses_second_octave_above_the_tonic() {
    // B C# D# E F# G# A#: every degree after the tonic is numerically below B
    assert_eq!(
        ids(PitchClass::B),
        vec![(11, 1, 1), (1, 2, 2), (3, 2, 3), (4, 2, 4), (6, 2, 5), (8, 2, 6), (10, 2, 7)]
    );
}

#[test]
fn test_every_key_highlights_seven_distinct_keys() {
    let keyboard = Keyboard::default();
    for tonic in PitchClass::ALL {
        let highlights = derive_scale_highlights(tonic, &keyboard);
        assert_eq!(highlights.len(), 7, "tonic {}", tonic);

        let mut keys: Vec<KeyId> = highlights.iter().map(|h| h.key).collect();
        keys.sort_by_key(|k| (k.octave, k.pitch_class));
        keys.dedup();
        assert_eq!(keys.len(), 7, "tonic {}", tonic);

        for (h, interval) in highlights.iter().zip(MAJOR_SCALE_INTERVALS) {
            assert_eq!(h.key.pitch_class, tonic.transpose(interval as i64));
            let expected_octave = if h.key.pitch_class < tonic { 2 } else { 1 };
            assert_eq!(h.key.octave, expected_octave);
        }
    }
}

#[test]
fn test_highlights_are_idempotent() {
    let keyboard = Keyboard::default();
    for tonic in PitchClass::ALL {
        assert_eq!(
            derive_scale_highlights(tonic, &keyboard),
            derive_scale_highlights(tonic, &keyboard)
        );
        assert_eq!(derive_key_signature(tonic), derive_key_signature(tonic));
    }
}

#[test]
fn test_key_signature_table() {
    let expected: [&[KeySignature]; 12] = [
        &[KeySignature::sharps(0)],
        &[KeySignature::sharps(7), KeySignature::flats(5)],
        &[KeySignature::sharps(2)],
        &[KeySignature::flats(3)],
        &[KeySignature::sharps(4)],
        &[KeySignature::flats(1)],
        &[KeySignature::sharps(6), KeySignature::flats(6)],
        &[KeySignature::sharps(1)],
        &[KeySignature::flats(4)],
        &[KeySignature::sharps(3)],
        &[KeySignature::flats(2)],
        &[KeySignature::sharps(5), KeySignature::flats(7)],
    ];
    for pc in PitchClass::ALL {
        assert_eq!(derive_key_signature(pc), expected[pc.index()], "pitch class {}", pc);
    }
}

#[test]
fn test_sharp_order_follows_circle_of_fifths() {
    // F C G D A E B on the treble staff: F5 on the top line, then down a fourth / up a fifth
    assert_eq!(
        accidental_glyph_positions(Clef::Treble, AccidentalKind::Sharp, 7),
        &[0.0, 2.5, -0.5, 2.0, 3.5, 1.5, 3.0]
    );
    assert_eq!(
        accidental_glyph_positions(Clef::Bass, AccidentalKind::Flat, 7),
        &[1.0, 2.5, 0.5, 2.0, 3.5, 1.5, 3.0]
    );
}

#[test]
fn test_staves_match_signatures() {
    let config = LayoutConfig::default();
    for pc in PitchClass::ALL {
        let signatures = derive_key_signature(pc);
        let staves = layout_staves(pc, &config);
        assert_eq!(staves.len(), signatures.len() * 2);
        for (pair, signature) in staves.chunks(2).zip(signatures) {
            assert_eq!(pair[0].clef, Clef::Treble);
            assert_eq!(pair[1].clef, Clef::Bass);
            for staff in pair {
                assert_eq!(staff.signature, *signature);
                assert_eq!(staff.accidentals.len(), signature.count as usize);
            }
        }
    }
}
