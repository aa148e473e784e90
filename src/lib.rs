//! Key Wheel WASM Module
//!
//! A rotatable chromatic dial and circle-of-fifths dial, a piano keyboard
//! highlighting the major scale of the selected key, and treble/bass staves
//! showing its key signature.

pub mod errors;
pub mod models;
pub mod layout;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use errors::WheelError;
pub use models::*;
pub use layout::{DisplayList, LayoutConfig, LayoutEngine, ScaleHighlight};
pub use renderers::{SnapshotRenderer, WheelController, WheelRenderer};
pub use api::KeyWheel;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_warn("logger already initialized");
    }

    // Builds and checks the theory tables now rather than on the first command
    let tables = models::TheoryTables::get();
    log::debug!("theory tables ready, G is {} step(s) round the circle", tables.fifths_index(PitchClass::G));

    log::info!("Key wheel WASM module initialized");
}
