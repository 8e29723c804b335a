//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the theme controller and the browser.
//! They are defined here (in `app`) so that the controller can be driven by
//! in-memory fakes in tests and by `web-sys` in the wasm adapter.

pub mod color_scheme;
pub mod document;
pub mod preference_store;

pub use color_scheme::ColorSchemeProbe;
pub use document::DocumentSurface;
pub use preference_store::PreferenceStore;
