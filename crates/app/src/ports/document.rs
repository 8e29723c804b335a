//! Document port — the parts of the page the controller mutates.

use themeswitch_domain::error::ThemeError;

use crate::config::ThemeTarget;

/// Write access to the icon elements and the themed container.
pub trait DocumentSurface {
    /// Replace the class list of the element with id `element_id`.
    ///
    /// Returns `Ok(false)` when no such element exists; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] when the document is not reachable.
    fn set_icon_class(&self, element_id: &str, class: &str) -> Result<bool, ThemeError>;

    /// Set attribute `name` to `value` on the `target` container.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] when the container is missing or the
    /// attribute cannot be set.
    fn set_theme_attribute(
        &self,
        target: ThemeTarget,
        name: &str,
        value: &str,
    ) -> Result<(), ThemeError>;
}
