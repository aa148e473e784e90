//! Renderers module for the key wheel
//!
//! A renderer turns DisplayList pieces into something visible. The layout
//! engine never talks to a UI toolkit directly; it only knows this trait.

pub mod controller;
pub mod dom;
pub mod snapshot;

pub use controller::WheelController;
pub use dom::DomRenderer;
pub use snapshot::SnapshotRenderer;

use crate::errors::WheelError;
use crate::layout::{DisplayList, ScaleHighlight, RenderStaff};
use crate::models::Dial;

pub trait WheelRenderer {
    /// Rotate a dial's inner ring (and counter-rotate its centre text)
    fn render_dial(&mut self, dial: Dial, angle: f64) -> Result<(), WheelError>;

    /// Show the current key name
    fn render_key_name(&mut self, name: &str) -> Result<(), WheelError>;

    /// Replace the highlighted keys and their degree labels
    fn render_keyboard_highlights(&mut self, highlights: &[ScaleHighlight]) -> Result<(), WheelError>;

    /// Replace the key-signature staves
    fn render_staff(&mut self, staves: &[RenderStaff]) -> Result<(), WheelError>;
}

/// Push one frame through a renderer
///
/// Stages are independent: a failing stage is logged and skipped, and the
/// remaining stages still run. Returns the errors of the skipped stages.
pub fn render_frame<R: WheelRenderer + ?Sized>(frame: &DisplayList, renderer: &mut R) -> Vec<WheelError> {
    let mut skipped = Vec::new();

    for dial in &frame.dials {
        if let Err(e) = renderer.render_dial(dial.dial, dial.angle) {
            log::warn!("skipping {} dial: {}", dial.dial.as_str(), e);
            skipped.push(e);
        }
    }
    if let Err(e) = renderer.render_key_name(&frame.key_name) {
        log::warn!("skipping key name: {}", e);
        skipped.push(e);
    }
    if let Err(e) = renderer.render_keyboard_highlights(&frame.highlights) {
        log::warn!("skipping keyboard highlights: {}", e);
        skipped.push(e);
    }
    if let Err(e) = renderer.render_staff(&frame.staves) {
        log::warn!("skipping staves: {}", e);
        skipped.push(e);
    }

    skipped
}
