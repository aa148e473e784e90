//! In-memory renderer
//!
//! Records what the last frame asked for. Used for JSON snapshots and for
//! exercising the render pass without a browser.

use serde::{Deserialize, Serialize};

use super::WheelRenderer;
use crate::errors::WheelError;
use crate::layout::{RenderStaff, ScaleHighlight};
use crate::models::Dial;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SnapshotRenderer {
    pub chromatic_angle: Option<f64>,
    pub fifths_angle: Option<f64>,
    pub key_name: Option<String>,
    pub highlights: Vec<ScaleHighlight>,
    pub staves: Vec<RenderStaff>,
    /// Number of staff passes seen; one per frame
    pub frames: usize,
}

impl SnapshotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self, dial: Dial) -> Option<f64> {
        match dial {
            Dial::Chromatic => self.chromatic_angle,
            Dial::Fifths => self.fifths_angle,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl WheelRenderer for SnapshotRenderer {
    fn render_dial(&mut self, dial: Dial, angle: f64) -> Result<(), WheelError> {
        match dial {
            Dial::Chromatic => self.chromatic_angle = Some(angle),
            Dial::Fifths => self.fifths_angle = Some(angle),
        }
        Ok(())
    }

    fn render_key_name(&mut self, name: &str) -> Result<(), WheelError> {
        self.key_name = Some(name.to_string());
        Ok(())
    }

    fn render_keyboard_highlights(&mut self, highlights: &[ScaleHighlight]) -> Result<(), WheelError> {
        self.highlights = highlights.to_vec();
        Ok(())
    }

    fn render_staff(&mut self, staves: &[RenderStaff]) -> Result<(), WheelError> {
        self.staves = staves.to_vec();
        self.frames += 1;
        Ok(())
    }
}
