//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised while wiring page behaviour to the DOM
#[derive(Error, Debug)]
pub enum UiError {
    #[error("JS error: {0}")]
    Js(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No browser window")]
    NoWindow,

    #[error("Missing element: {0}")]
    Missing(&'static str),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_message(&value))
    }
}

/// Best-effort readable text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type UiResult<T> = Result<T, UiError>;
