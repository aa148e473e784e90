//! Layout configuration
//!
//! All sizes the layout engine needs that are not music theory. Every field
//! has a default, so a config file only has to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::errors::WheelError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Dial diameter in pixels, used when the dial element cannot be measured
    pub dial_diameter: f32,

    /// Outer note labels sit at this fraction of the dial radius
    pub outer_label_radius_ratio: f32,

    /// Inner degree numbers sit at this fraction of the dial radius
    pub inner_degree_radius_ratio: f32,

    /// Number of octaves on the keyboard strip
    pub keyboard_octaves: u8,

    /// Distance between staff lines (em)
    pub staff_line_spacing: f32,

    /// Clef glyph font size (em)
    pub clef_font_size: f32,

    /// Clef left offset (pixels)
    pub clef_left: f32,

    /// Treble clef top offset (em)
    pub treble_clef_top: f32,

    /// Bass clef top offset (em)
    pub bass_clef_top: f32,

    /// Accidental glyph font size (em)
    pub accidental_font_size: f32,

    /// X position of the first accidental (pixels)
    pub accidental_left: f32,

    /// Horizontal distance between accidentals (pixels)
    pub accidental_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            dial_diameter: 300.0,
            outer_label_radius_ratio: 0.85,
            inner_degree_radius_ratio: 0.8,
            keyboard_octaves: 2,
            staff_line_spacing: 1.0,
            clef_font_size: 4.0,
            clef_left: 5.0,
            treble_clef_top: 0.0,
            bass_clef_top: 1.0,
            accidental_font_size: 2.5,
            accidental_left: 50.0,
            accidental_spacing: 18.0,
        }
    }
}

impl LayoutConfig {
    pub fn from_yaml(source: &str) -> Result<Self, WheelError> {
        let config: Self =
            serde_yaml::from_str(source).map_err(|e| WheelError::Config(e.to_string()))?;
        config.validated()
    }

    pub fn from_json(source: &str) -> Result<Self, WheelError> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| WheelError::Config(e.to_string()))?;
        config.validated()
    }

    /// Reject values the layout math cannot use
    pub fn validated(self) -> Result<Self, WheelError> {
        if !(self.dial_diameter > 0.0) {
            return Err(WheelError::Config(format!(
                "dial_diameter must be positive, got {}",
                self.dial_diameter
            )));
        }
        for (name, ratio) in [
            ("outer_label_radius_ratio", self.outer_label_radius_ratio),
            ("inner_degree_radius_ratio", self.inner_degree_radius_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(WheelError::Config(format!("{} must be within 0-1, got {}", name, ratio)));
            }
        }
        if self.keyboard_octaves == 0 {
            return Err(WheelError::Config("keyboard_octaves must be at least 1".to_string()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = LayoutConfig::from_yaml("dial_diameter: 420\naccidental_spacing: 20\n").unwrap();
        assert_eq!(config.dial_diameter, 420.0);
        assert_eq!(config.accidental_spacing, 20.0);
        assert_eq!(config.outer_label_radius_ratio, 0.85);
        assert_eq!(config.keyboard_octaves, 2);
    }

    #[test]
    fn test_json_config() {
        let config = LayoutConfig::from_json(r#"{"keyboard_octaves": 3}"#).unwrap();
        assert_eq!(config.keyboard_octaves, 3);
        assert_eq!(config.accidental_left, 50.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(LayoutConfig::from_yaml("dial_diameter: 0").is_err());
        assert!(LayoutConfig::from_yaml("inner_degree_radius_ratio: 1.5").is_err());
        assert!(LayoutConfig::from_json(r#"{"keyboard_octaves": 0}"#).is_err());
        assert!(matches!(
            LayoutConfig::from_yaml("dial_diameter: [1, 2]"),
            Err(WheelError::Config(_))
        ));
    }
}
