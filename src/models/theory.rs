//! Fixed music-theory tables
//!
//! The circle-of-fifths order and the major-scale intervals are plain
//! constants. `TheoryTables` checks them (and the key-signature table) once,
//! the first time anything asks for them.

use once_cell::sync::Lazy;

use crate::errors::WheelError;
use crate::models::key_signature::KEY_SIGNATURES;
use crate::models::pitch_class::PitchClass;

/// Pitch classes ordered by ascending perfect fifths, starting at C
pub const CIRCLE_OF_FIFTHS_ORDER: [u8; 12] = [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5];

/// Semitone offsets of scale degrees 1..=7 from the tonic
pub const MAJOR_SCALE_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Validated, precomputed views over the static tables
#[derive(Debug)]
pub struct TheoryTables {
    /// Inverse of `CIRCLE_OF_FIFTHS_ORDER`: position on the fifths dial per pitch class
    fifths_position: [usize; 12],
}

static TABLES: Lazy<TheoryTables> = Lazy::new(|| match TheoryTables::build() {
    Ok(tables) => tables,
    // The tables are compile-time literals; a failure here is a programming error
    Err(e) => panic!("{}", e),
});

impl TheoryTables {
    /// Shared, validated tables
    pub fn get() -> &'static TheoryTables {
        &TABLES
    }

    /// Validate every table and build the inverse lookups
    pub fn build() -> Result<Self, WheelError> {
        let fifths_position = invert_permutation(&CIRCLE_OF_FIFTHS_ORDER, "circle of fifths")?;
        validate_intervals(&MAJOR_SCALE_INTERVALS)?;

        for pc in PitchClass::ALL {
            let variants = KEY_SIGNATURES[pc.index()];
            if variants.is_empty() || variants.len() > 2 {
                return Err(WheelError::IncompleteTable {
                    table: "key signatures",
                    reason: format!("pitch class {} has {} variants", pc.index(), variants.len()),
                });
            }
            if let Some(sig) = variants.iter().find(|sig| sig.count > 7) {
                return Err(WheelError::IncompleteTable {
                    table: "key signatures",
                    reason: format!("pitch class {} has {} accidentals", pc.index(), sig.count),
                });
            }
        }

        log::debug!("theory tables validated");
        Ok(Self { fifths_position })
    }

    /// Position (0..12) of a pitch class on the circle of fifths
    pub fn fifths_index(&self, pc: PitchClass) -> usize {
        self.fifths_position[pc.index()]
    }

    /// Pitch class at a position on the circle of fifths
    pub fn fifths_at(&self, position: usize) -> PitchClass {
        PitchClass::wrapping(CIRCLE_OF_FIFTHS_ORDER[position % 12] as i64)
    }
}

/// Shorthand for `TheoryTables::get().fifths_index(pc)`
pub fn fifths_index(pc: PitchClass) -> usize {
    TheoryTables::get().fifths_index(pc)
}

fn invert_permutation(order: &[u8; 12], table: &'static str) -> Result<[usize; 12], WheelError> {
    let mut inverse = [usize::MAX; 12];
    for (position, &value) in order.iter().enumerate() {
        let slot = inverse.get_mut(value as usize).ok_or_else(|| WheelError::IncompleteTable {
            table,
            reason: format!("value {} out of range", value),
        })?;
        if *slot != usize::MAX {
            return Err(WheelError::IncompleteTable {
                table,
                reason: format!("value {} appears twice", value),
            });
        }
        *slot = position;
    }
    Ok(inverse)
}

fn validate_intervals(intervals: &[u8; 7]) -> Result<(), WheelError> {
    if intervals[0] != 0 || intervals.windows(2).any(|w| w[0] >= w[1]) || intervals[6] >= 12 {
        return Err(WheelError::IncompleteTable {
            table: "major scale intervals",
            reason: format!("{:?} is not a strictly ascending scale from 0", intervals),
        });
    }
    Ok(())
}
