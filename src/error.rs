//! Faults raised while binding to the host document.
//!
//! Every variant describes a page that does not satisfy the markup contract
//! in [`crate::config::SiteConfig`]. None of them are recoverable at runtime:
//! the shell logs the error and leaves the page as rendered.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("missing element: {id}")]
    MissingElement { id: String },
    #[error("element {id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("page has no content sections")]
    NoSections,
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom error: {0}")]
    Dom(String),
}

impl SiteError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
