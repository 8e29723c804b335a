//! Color scheme port — the system-level dark mode signal.

use themeswitch_domain::error::ThemeError;

/// Reports whether the environment prefers a dark color scheme.
pub trait ColorSchemeProbe {
    /// # Errors
    ///
    /// Returns [`ThemeError::ColorScheme`] when the query cannot be made.
    fn prefers_dark(&self) -> Result<bool, ThemeError>;
}

impl<F> ColorSchemeProbe for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Ok(self())
    }
}
