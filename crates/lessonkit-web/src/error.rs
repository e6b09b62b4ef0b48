//! Errors raised while binding widgets to the page.

use lessonkit_core::ConfigError;
use thiserror::Error;

/// Web shell errors.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("No window object")]
    NoWindow,
    #[error("No document object")]
    NoDocument,
    #[error("Missing element: {selector}")]
    MissingElement { selector: String },
    #[error("Unknown widget kind: {0}")]
    UnknownWidget(String),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("JS error: {0}")]
    Js(String),
}

/// Result type for web shell operations.
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for WebError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        Self::Js(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(error: WebError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let error = WebError::missing(".code-container");
        assert_eq!(error.to_string(), "Missing element: .code-container");
    }

    #[test]
    fn test_config_error_converts() {
        let error: WebError = ConfigError::Invalid("course must not be empty".to_string()).into();
        assert!(matches!(error, WebError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Config error: Invalid config: course must not be empty"
        );
    }
}
