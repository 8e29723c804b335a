//! `localStorage` implementation of [`PreferenceStore`].

use themeswitch_app::ports::PreferenceStore;
use themeswitch_domain::error::ThemeError;

use crate::error::HostError;

/// Preference store backed by the origin's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, HostError> {
        web_sys::window()
            .ok_or(HostError::NoWindow)?
            .local_storage()?
            .ok_or(HostError::StorageUnavailable)
    }
}

fn storage_error(err: HostError) -> ThemeError {
    ThemeError::Storage(Box::new(err))
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let storage = Self::storage().map_err(storage_error)?;
        storage
            .get_item(key)
            .map_err(|err| storage_error(err.into()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = Self::storage().map_err(storage_error)?;
        storage
            .set_item(key, value)
            .map_err(|err| storage_error(err.into()))
    }
}
