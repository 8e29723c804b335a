//! Preference store port — origin-scoped persistent key/value storage.

use themeswitch_domain::error::ThemeError;

/// Persistent string storage for the theme preference.
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store is unavailable.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store is unavailable or
    /// rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}
