//! Page-level configuration, read from the `<html>` element.
//!
//! ```html
//! <html data-themeswitch-config='{"theme_attribute": "data-theme", "target": "root"}'>
//! ```

use themeswitch_app::config::ThemeConfig;

/// Attribute on `<html>` holding a JSON [`ThemeConfig`] override.
pub const CONFIG_ATTRIBUTE: &str = "data-themeswitch-config";

/// Read the configuration from the current document, falling back to
/// defaults when the attribute is absent or malformed.
#[must_use]
pub fn load_config() -> ThemeConfig {
    let raw = crate::dom::document()
        .ok()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    parse_config(raw.as_deref())
}

fn parse_config(raw: Option<&str>) -> ThemeConfig {
    let Some(raw) = raw else {
        return ThemeConfig::default();
    };
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "malformed {CONFIG_ATTRIBUTE}, using defaults");
            ThemeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeswitch_app::config::ThemeTarget;

    #[test]
    fn should_use_defaults_when_attribute_absent() {
        assert_eq!(parse_config(None), ThemeConfig::default());
    }

    #[test]
    fn should_apply_override_when_attribute_present() {
        let config = parse_config(Some(r#"{"storage_key": "site_theme", "target": "root"}"#));
        assert_eq!(config.storage_key, "site_theme");
        assert_eq!(config.target, ThemeTarget::Root);
        assert_eq!(config.theme_attribute, "data-bs-theme");
    }

    #[test]
    fn should_fall_back_to_defaults_when_json_malformed() {
        assert_eq!(parse_config(Some("{storage_key")), ThemeConfig::default());
    }
}
