//! Theme controller — applies the stored preference to the document and
//! records explicit user choices.

use themeswitch_domain::error::ThemeError;
use themeswitch_domain::theme::Appearance;

use crate::config::ThemeConfig;
use crate::ports::{ColorSchemeProbe, DocumentSurface, PreferenceStore};

/// Reads the theme preference and keeps the document in sync with it.
pub struct ThemeController<S, P, D> {
    config: ThemeConfig,
    store: S,
    probe: P,
    document: D,
}

impl<S, P, D> ThemeController<S, P, D>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    D: DocumentSurface,
{
    /// Create a controller over the given ports.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if `config` fails validation.
    pub fn new(config: ThemeConfig, store: S, probe: P, document: D) -> Result<Self, ThemeError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            probe,
            document,
        })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Resolve the stored preference without touching the document.
    ///
    /// # Errors
    ///
    /// Propagates storage and color scheme errors.
    pub fn current_appearance(&self) -> Result<Appearance, ThemeError> {
        let stored = self.store.load(&self.config.storage_key)?;
        Appearance::resolve(stored.as_deref(), || self.probe.prefers_dark())
    }

    /// Apply the stored preference to the icon elements and the themed
    /// container.
    ///
    /// Calling this again with unchanged storage and system signal leaves
    /// the document in the same state.
    ///
    /// # Errors
    ///
    /// Propagates storage, color scheme and document errors unchanged.
    pub fn apply_current_preference(&self) -> Result<Appearance, ThemeError> {
        let appearance = self.current_appearance()?;
        let class = appearance.icon.css_class();

        for id in &self.config.icon_element_ids {
            if !self.document.set_icon_class(id, class)? {
                tracing::trace!(element_id = %id, "icon element not present, skipping");
            }
        }

        if appearance.theme.is_none() {
            tracing::debug!("no stored preference and system is not dark, theme left undefined");
        }
        self.document.set_theme_attribute(
            self.config.target,
            &self.config.theme_attribute,
            appearance.attribute_value(),
        )?;

        tracing::debug!(
            theme = appearance.attribute_value(),
            icon = class,
            "applied theme preference"
        );
        Ok(appearance)
    }

    /// Store `mode` as the preference and apply it immediately.
    ///
    /// `mode` is written verbatim; values other than `"light"` and `"dark"`
    /// behave like an unset preference.
    ///
    /// # Errors
    ///
    /// Propagates the storage write error, or any error from
    /// [`apply_current_preference`](Self::apply_current_preference).
    pub fn set_preference(&self, mode: &str) -> Result<Appearance, ThemeError> {
        self.store.save(&self.config.storage_key, mode)?;
        tracing::debug!(mode, "stored theme preference");
        self.apply_current_preference()
    }
}
