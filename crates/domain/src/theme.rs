//! Theme — the stored preference, the applied theme, and the icon shown for it.

/// Attribute value written when no theme could be resolved.
///
/// Matches what a browser stores when handed an undefined value, so pages
/// styled against the previous behavior keep working.
pub const UNDEFINED_THEME: &str = "undefined";

/// A concrete visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Interpret a raw stored preference.
    ///
    /// Only the exact strings `"light"` and `"dark"` are recognised; anything
    /// else is treated as no preference at all.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon displayed next to the theme switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconGlyph {
    Sun,
    Moon,
    /// No explicit preference; the theme follows the system.
    SunMoon,
}

impl IconGlyph {
    /// CSS class list for the icon element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Sun => "ti ti-sun",
            Self::Moon => "ti ti-moon",
            Self::SunMoon => "ti ti-sun-moon",
        }
    }
}

/// The visual state derived from a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// `None` when there is no preference and the system does not prefer dark.
    pub theme: Option<Theme>,
    pub icon: IconGlyph,
}

impl Appearance {
    /// Resolve the appearance for a stored preference.
    ///
    /// `prefers_dark` is only called when the preference is unset, and its
    /// error is returned as-is.
    ///
    /// # Errors
    ///
    /// Propagates whatever `prefers_dark` returns.
    pub fn resolve<E>(
        stored: Option<&str>,
        prefers_dark: impl FnOnce() -> Result<bool, E>,
    ) -> Result<Self, E> {
        let appearance = match stored.and_then(Theme::from_stored) {
            Some(Theme::Light) => Self {
                theme: Some(Theme::Light),
                icon: IconGlyph::Sun,
            },
            Some(Theme::Dark) => Self {
                theme: Some(Theme::Dark),
                icon: IconGlyph::Moon,
            },
            None => Self {
                theme: prefers_dark()?.then_some(Theme::Dark),
                icon: IconGlyph::SunMoon,
            },
        };
        Ok(appearance)
    }

    /// Value for the document's theme attribute.
    #[must_use]
    pub fn attribute_value(&self) -> &'static str {
        self.theme.map_or(UNDEFINED_THEME, Theme::as_str)
    }
}
