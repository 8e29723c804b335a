//! Theme configuration — where the preference lives and what gets updated.
//!
//! Every field has a default matching the stock page layout, so an empty
//! JSON object is a valid configuration.

use serde::Deserialize;
use themeswitch_domain::error::ConfigError;

/// Container that receives the theme attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTarget {
    /// The `<body>` element.
    #[default]
    Body,
    /// The document element (`<html>`).
    Root,
}

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the preference in persistent storage.
    pub storage_key: String,
    /// Ids of the icon elements to update, in order. Missing ones are skipped.
    pub icon_element_ids: Vec<String>,
    /// Attribute carrying the theme on the target container.
    pub theme_attribute: String,
    pub target: ThemeTarget,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "misterx_theme".to_string(),
            icon_element_ids: vec![
                "id_theme_icon".to_string(),
                "id_theme_icon_mobile".to_string(),
            ],
            theme_attribute: "data-bs-theme".to_string(),
            target: ThemeTarget::Body,
        }
    }
}

impl ThemeConfig {
    /// Check that the configuration can address storage and the document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] or
    /// [`ConfigError::EmptyThemeAttribute`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.theme_attribute.is_empty() {
            return Err(ConfigError::EmptyThemeAttribute);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_page_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "misterx_theme");
        assert_eq!(
            config.icon_element_ids,
            vec!["id_theme_icon", "id_theme_icon_mobile"]
        );
        assert_eq!(config.theme_attribute, "data-bs-theme");
        assert_eq!(config.target, ThemeTarget::Body);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_deserialize_from_json() {
        let json = r#"{
            "storage_key": "site_theme",
            "icon_element_ids": ["theme-icon"],
            "theme_attribute": "data-theme",
            "target": "root"
        }"#;
        let config: ThemeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.storage_key, "site_theme");
        assert_eq!(config.icon_element_ids, vec!["theme-icon"]);
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.target, ThemeTarget::Root);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: ThemeConfig = serde_json::from_str(r#"{"target": "root"}"#).unwrap();
        assert_eq!(config.storage_key, "misterx_theme");
        assert_eq!(config.icon_element_ids.len(), 2);
        assert_eq!(config.target, ThemeTarget::Root);
    }

    #[test]
    fn should_reject_empty_storage_key() {
        let config = ThemeConfig {
            storage_key: String::new(),
            ..ThemeConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyStorageKey));
    }

    #[test]
    fn should_reject_empty_theme_attribute() {
        let config = ThemeConfig {
            theme_attribute: String::new(),
            ..ThemeConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyThemeAttribute));
    }

    #[test]
    fn should_reject_unknown_target() {
        let result = serde_json::from_str::<ThemeConfig>(r#"{"target": "main"}"#);
        assert!(result.is_err());
    }
}
