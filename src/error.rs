//! Crate error type.
//!
//! Errors never escape an event handler: the browser host logs them and moves
//! on, so one failing DOM call cannot take down unrelated features.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("element not found: {selector}")]
    MissingElement { selector: String },
    #[error("javascript error: {0}")]
    Js(String),
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("contact submission failed: {0}")]
    Submit(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Self::Js(message);
        }
        match js_sys::JSON::stringify(&value) {
            Ok(json) => Self::Js(String::from(json)),
            Err(_) => Self::Js(format!("{value:?}")),
        }
    }
}
