//! Models module for the key wheel
//!
//! This module contains the static music-theory tables and the
//! navigation state they are read against.

pub mod pitch_class;
pub mod theory;
pub mod key_signature;
pub mod keyboard;
pub mod wheel_state;

// Re-export commonly used types
pub use pitch_class::{PitchClass, KEY_DISPLAY_NAMES, NOTE_NAMES, SHARP_NAMES};
pub use theory::{fifths_index, TheoryTables, CIRCLE_OF_FIFTHS_ORDER, MAJOR_SCALE_INTERVALS};
pub use key_signature::{
    accidental_glyph_positions, accidental_positions, derive_key_signature, AccidentalKind, Clef,
    KeySignature, KEY_SIGNATURES,
};
pub use keyboard::{KeyId, Keyboard, PianoKey};
pub use wheel_state::{nearest_equivalent, Command, Dial, Direction, WheelState, STEP_DEGREES};
