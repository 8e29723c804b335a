//! Common error types used across the workspace.
//!
//! Each failure category carries its typed source so adapters can wrap
//! whatever their host reports without flattening it into a string.

/// Boxed source error produced by an adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every theme operation.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Reading or writing the persistent preference store failed.
    #[error("preference storage error")]
    Storage(#[source] BoxError),

    /// The ambient color-scheme query failed.
    #[error("color scheme query error")]
    ColorScheme(#[source] BoxError),

    /// The document could not be updated.
    #[error("document error")]
    Document(#[source] BoxError),

    /// Configuration failed validation.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
}

/// Validation errors for theme configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    #[error("theme attribute name must not be empty")]
    EmptyThemeAttribute,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    #[test]
    fn should_expose_source_when_storage_fails() {
        let err = ThemeError::Storage(Box::new(QuotaExceeded));
        assert_eq!(err.to_string(), "preference storage error");
        assert_eq!(err.source().unwrap().to_string(), "quota exceeded");
    }

    #[test]
    fn should_convert_config_error_into_theme_error() {
        let err: ThemeError = ConfigError::EmptyStorageKey.into();
        assert!(matches!(
            err,
            ThemeError::Config(ConfigError::EmptyStorageKey)
        ));
    }

    #[test]
    fn should_display_config_error() {
        assert_eq!(
            ConfigError::EmptyThemeAttribute.to_string(),
            "theme attribute name must not be empty"
        );
    }
}
