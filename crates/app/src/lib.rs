//! # themeswitch-app
//!
//! Application layer — the theme controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PreferenceStore` — persistent key/value storage for the preference
//!   - `ColorSchemeProbe` — the system dark mode signal
//!   - `DocumentSurface` — icon elements and the themed container
//! - Define the **ThemeController** use-case: apply the stored preference,
//!   record a new one
//! - Hold the controller configuration
//!
//! ## Dependency rule
//! Depends on `themeswitch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod controller;
pub mod ports;
