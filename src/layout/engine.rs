//! Frame layout
//!
//! This module contains the main entry point for layout calculations,
//! taking a wheel state and producing a DisplayList.

use super::config::LayoutConfig;
use super::dial::{inner_degrees, outer_labels, DialDegree, DialLabel};
use super::display_list::{DisplayList, RenderDial, RenderKey};
use super::highlights::{derive_scale_highlights, ScaleHighlight};
use super::staff::{layout_staves, RenderStaff};
use crate::models::{Dial, Keyboard, PitchClass, WheelState};

/// Main layout engine for computing display lists
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    keyboard: Keyboard,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        let keyboard = Keyboard::with_octaves(config.keyboard_octaves);
        Self { config, keyboard }
    }

    /// Engine laid out against an explicit keyboard instead of the configured strip
    pub fn with_keyboard(config: LayoutConfig, keyboard: Keyboard) -> Self {
        Self { config, keyboard }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Outer labels and inner degrees for a dial of the given diameter
    pub fn dial_rings(&self, dial: Dial, diameter: f32) -> (Vec<DialLabel>, Vec<DialDegree>) {
        let radius = diameter / 2.0;
        (
            outer_labels(dial, radius * self.config.outer_label_radius_ratio),
            inner_degrees(dial, radius * self.config.inner_degree_radius_ratio),
        )
    }

    pub fn scale_highlights(&self, tonic: PitchClass) -> Vec<ScaleHighlight> {
        derive_scale_highlights(tonic, &self.keyboard)
    }

    pub fn staves(&self, tonic: PitchClass) -> Vec<RenderStaff> {
        layout_staves(tonic, &self.config)
    }

    /// Compute the complete frame for a state
    pub fn compute_layout(&self, state: &WheelState) -> DisplayList {
        let tonic = state.pitch_class;

        let dials = Dial::ALL
            .iter()
            .map(|&dial| {
                let (labels, degrees) = self.dial_rings(dial, self.config.dial_diameter);
                let angle = state.angle(dial);
                RenderDial {
                    dial,
                    angle,
                    center_text_angle: -angle,
                    labels,
                    degrees,
                }
            })
            .collect();

        let highlights = self.scale_highlights(tonic);
        let keys = self
            .keyboard
            .keys()
            .iter()
            .map(|key| RenderKey {
                note: key.id.data_note(),
                is_black: key.is_black,
                label: key.label.clone(),
                degree: highlights.iter().find(|h| h.key == key.id).map(|h| h.degree),
            })
            .collect();

        DisplayList {
            pitch_class: tonic,
            key_name: tonic.key_display_name().to_string(),
            dials,
            keys,
            highlights,
            staves: self.staves(tonic),
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
