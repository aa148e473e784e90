//! Display List for the key wheel
//!
//! This module defines the output structure returned from the layout engine.
//! The DisplayList carries everything a renderer needs for one frame: dial
//! angles and ring labels, the keyboard with its highlights, and the staves.

use serde::{Deserialize, Serialize};

use super::dial::{DialDegree, DialLabel};
use super::highlights::ScaleHighlight;
use super::staff::RenderStaff;
use crate::models::{Dial, PitchClass};

/// Top-level display list for one frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub pitch_class: PitchClass,

    /// Label shown in the centre of both dials
    pub key_name: String,

    /// Chromatic dial first, fifths dial second
    pub dials: Vec<RenderDial>,

    /// Every key on the strip, in strip order
    pub keys: Vec<RenderKey>,

    /// Highlighted keys in degree order
    pub highlights: Vec<ScaleHighlight>,

    /// Treble/bass staff pairs, one pair per key-signature spelling
    pub staves: Vec<RenderStaff>,
}

/// A dial with its rotation and ring contents
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderDial {
    pub dial: Dial,

    /// Rotation of the inner ring (degrees)
    pub angle: f64,

    /// Rotation of the centre text; cancels `angle` so the text stays upright
    pub center_text_angle: f64,

    pub labels: Vec<DialLabel>,

    pub degrees: Vec<DialDegree>,
}

/// A keyboard key with its highlight state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderKey {
    /// `data-note` id ("C#", "C#2", ...)
    pub note: String,

    pub is_black: bool,

    pub label: Option<String>,

    /// Scale degree when highlighted
    pub degree: Option<u8>,
}

impl RenderKey {
    pub fn is_highlighted(&self) -> bool {
        self.degree.is_some()
    }
}

impl DisplayList {
    pub fn dial(&self, dial: Dial) -> Option<&RenderDial> {
        self.dials.iter().find(|d| d.dial == dial)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
