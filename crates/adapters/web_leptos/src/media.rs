//! `matchMedia` implementation of [`ColorSchemeProbe`].

use themeswitch_app::ports::ColorSchemeProbe;
use themeswitch_domain::error::ThemeError;

use crate::error::HostError;

/// Media query matching a system-wide dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Reads the system color scheme through `window.matchMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        let query = web_sys::window()
            .ok_or(HostError::NoWindow)
            .and_then(|window| window.match_media(DARK_SCHEME_QUERY).map_err(HostError::from))
            .map_err(|err| ThemeError::ColorScheme(Box::new(err)))?;
        // Browsers without media query support hand back `null`.
        Ok(query.is_some_and(|list| list.matches()))
    }
}
