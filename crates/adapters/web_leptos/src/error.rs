//! Browser host errors.

use themeswitch_app::config::ThemeTarget;
use wasm_bindgen::JsValue;

/// Failures reported by the browser APIs behind the ports.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// `localStorage` is disabled, e.g. by browser policy.
    #[error("localStorage is not available")]
    StorageUnavailable,

    #[error("theme container {0:?} not found")]
    MissingContainer(ThemeTarget),

    #[error("element {0:?} not found")]
    MissingElement(String),

    /// A browser API threw. `JsValue` is neither `Send` nor `Sync`, so it
    /// cannot ride inside the boxed source of a `ThemeError`; its rendering
    /// is kept instead.
    #[error("javascript exception: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
