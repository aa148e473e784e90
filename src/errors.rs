//! Error types for the key wheel
//!
//! Pitch-class arithmetic itself cannot fail; these errors cover raw input
//! coming across the JavaScript boundary, configuration parsing and DOM
//! operations performed by the renderers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    /// A raw pitch class outside 0..=11
    #[error("Invalid pitch class: {0} (must be 0-11)")]
    InvalidPitchClass(i64),

    /// A note name that does not spell any pitch class
    #[error("Invalid note name: '{0}'")]
    UnknownNoteName(String),

    /// A static theory table failed its startup check
    #[error("Incomplete table {table}: {reason}")]
    IncompleteTable { table: &'static str, reason: String },

    /// Layout configuration could not be parsed
    #[error("Invalid layout config: {0}")]
    Config(String),

    /// A DOM call failed or a required element was missing
    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, WheelError>;

impl From<wasm_bindgen::JsValue> for WheelError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        WheelError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<WheelError> for wasm_bindgen::JsValue {
    fn from(err: WheelError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
