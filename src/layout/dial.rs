//! Dial ring layout
//!
//! Each dial is two concentric rings. The outer ring carries the 12 note
//! labels, the inner ring the major-scale degree numbers 1..7. Position 0
//! is at 12 o'clock and positions advance clockwise in 30° steps.

use serde::{Deserialize, Serialize};

use crate::models::{fifths_index, Dial, PitchClass, CIRCLE_OF_FIFTHS_ORDER, MAJOR_SCALE_INTERVALS};

/// A note label on the outer ring
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DialLabel {
    pub pitch_class: PitchClass,
    pub text: String,
    /// Offset from the dial centre (pixels)
    pub x: f32,
    pub y: f32,
    /// Label spells an accidental and gets black-key styling
    pub is_black_key: bool,
}

/// A degree number on the inner ring
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DialDegree {
    /// 1-based scale degree
    pub degree: u8,
    pub x: f32,
    pub y: f32,
}

/// Centre offset of ring position `position` (0..12) at `radius`
pub fn polar_offset(position: f32, radius: f32) -> (f32, f32) {
    let angle = (position / 12.0 * 360.0 - 90.0).to_radians();
    (radius * angle.cos(), radius * angle.sin())
}

/// Pitch classes in ring order for a dial
pub fn ring_order(dial: Dial) -> [PitchClass; 12] {
    match dial {
        Dial::Chromatic => PitchClass::ALL,
        Dial::Fifths => CIRCLE_OF_FIFTHS_ORDER.map(|pc| PitchClass::wrapping(pc as i64)),
    }
}

/// Ring positions of scale degrees 1..7 on a dial
///
/// On the chromatic dial these are the interval sizes themselves; on the
/// fifths dial each interval is looked up on the circle of fifths.
pub fn degree_positions(dial: Dial) -> [usize; 7] {
    match dial {
        Dial::Chromatic => MAJOR_SCALE_INTERVALS.map(|i| i as usize),
        Dial::Fifths => MAJOR_SCALE_INTERVALS.map(|i| fifths_index(PitchClass::wrapping(i as i64))),
    }
}

pub fn outer_labels(dial: Dial, radius: f32) -> Vec<DialLabel> {
    ring_order(dial)
        .iter()
        .enumerate()
        .map(|(i, &pc)| {
            let (x, y) = polar_offset(i as f32, radius);
            let text = pc.display_name();
            DialLabel {
                pitch_class: pc,
                text: text.to_string(),
                x,
                y,
                is_black_key: text.contains('♯') || text.contains('♭'),
            }
        })
        .collect()
}

pub fn inner_degrees(dial: Dial, radius: f32) -> Vec<DialDegree> {
    degree_positions(dial)
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let (x, y) = polar_offset(position as f32, radius);
            DialDegree {
                degree: (i + 1) as u8,
                x,
                y,
            }
        })
        .collect()
}
