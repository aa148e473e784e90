//! Layout Engine
//!
//! This module turns a wheel state into a DisplayList: dial angles and ring
//! labels, keyboard highlights, and key-signature staves. Renderers only
//! place what the DisplayList describes.

pub mod config;
pub mod dial;
pub mod highlights;
pub mod staff;
pub mod display_list;
pub mod engine;

pub use config::LayoutConfig;
pub use dial::{DialDegree, DialLabel};
pub use display_list::{DisplayList, RenderDial, RenderKey};
pub use engine::LayoutEngine;
pub use highlights::{derive_scale_highlights, ScaleHighlight};
pub use staff::{layout_staff, layout_staves, AccidentalGlyph, RenderStaff};
