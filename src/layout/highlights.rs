//! Keyboard highlights for the major scale
//!
//! Degree keys are chosen with a numeric octave rule: a degree whose pitch
//! class is numerically below the tonic goes to the second octave, anything
//! else to the first. When the keyboard has no such second-octave key the
//! first-octave key of the same name is used; when that is missing too the
//! degree is skipped.

use serde::{Deserialize, Serialize};

use crate::models::{KeyId, Keyboard, PitchClass, MAJOR_SCALE_INTERVALS};

/// One highlighted key and its degree label
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleHighlight {
    pub key: KeyId,
    /// 1-based scale degree
    pub degree: u8,
}

/// Highlights for the major scale on `tonic`, in degree order
pub fn derive_scale_highlights(tonic: PitchClass, keyboard: &Keyboard) -> Vec<ScaleHighlight> {
    MAJOR_SCALE_INTERVALS
        .iter()
        .enumerate()
        .filter_map(|(i, &interval)| {
            let degree = (i + 1) as u8;
            let note = tonic.transpose(interval as i64);
            let needs_octave_2 = note < tonic;
            let preferred = KeyId::new(note, if needs_octave_2 { 2 } else { 1 });

            let key = if keyboard.contains(preferred) {
                preferred
            } else {
                let first_octave = KeyId::new(note, 1);
                if !keyboard.contains(first_octave) {
                    log::debug!("no key for degree {} ({}), skipping", degree, note);
                    return None;
                }
                first_octave
            };
            Some(ScaleHighlight { key, degree })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(highlights: &[ScaleHighlight]) -> Vec<String> {
        highlights.iter().map(|h| h.key.data_note()).collect()
    }

    #[test]
    fn test_c_major_stays_in_first_octave() {
        let highlights = derive_scale_highlights(PitchClass::C, &Keyboard::default());
        assert_eq!(notes(&highlights), vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert!(highlights.iter().all(|h| h.key.octave == 1));
    }

    #[test]
    fn test_g_major_wraps_into_second_octave() {
        let highlights = derive_scale_highlights(PitchClass::G, &Keyboard::default());
        assert_eq!(notes(&highlights), vec!["G", "A", "B", "C2", "D2", "E2", "F#2"]);
    }

    #[test]
    fn test_missing_second_octave_falls_back_to_first() {
        let highlights = derive_scale_highlights(PitchClass::G, &Keyboard::with_octaves(1));
        assert_eq!(notes(&highlights), vec!["G", "A", "B", "C", "D", "E", "F#"]);
    }

    #[test]
    fn test_missing_key_is_skipped() {
        let keyboard = Keyboard::from_ids([
            KeyId::new(PitchClass::C, 1),
            KeyId::new(PitchClass::E, 1),
            KeyId::new(PitchClass::G, 1),
        ]);
        let highlights = derive_scale_highlights(PitchClass::C, &keyboard);
        let degrees: Vec<u8> = highlights.iter().map(|h| h.degree).collect();
        assert_eq!(degrees, vec![1, 3, 5]);
    }
}
