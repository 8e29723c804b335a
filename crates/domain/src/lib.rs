//! # themeswitch-domain
//!
//! Pure domain model for the themeswitch page theme controller.
//!
//! ## Responsibilities
//! - Define **Theme** (the concrete light/dark look of the page)
//! - Define **IconGlyph** (the icon shown for the current preference)
//! - Resolve a stored preference into an **Appearance**
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;
