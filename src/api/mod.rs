//! Key Wheel WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and validation shared by the API
//! - `wheel`: the `KeyWheel` widget object
//! - `theory`: stateless lookups (key signatures, highlights, accidental positions)

pub mod helpers;
pub mod theory;
pub mod wheel;

pub use theory::{accidental_positions_for, key_signature_for, parse_pitch_class, scale_highlights_for};
pub use wheel::KeyWheel;
