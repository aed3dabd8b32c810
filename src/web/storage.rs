//! `localStorage`-backed [`PreferenceStore`]

use snafu::OptionExt;
use web_sys::{Storage, Window};

use crate::error::{Result, StorageSnafu};
use crate::utils::preference_store::PreferenceStore;

/// The window's `localStorage`
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    // Looked up per call; access can be revoked at runtime
    fn storage(&self) -> Result<Storage> {
        self.window
            .local_storage()
            .ok()
            .flatten()
            .context(StorageSnafu {
                message: "localStorage unavailable",
            })
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| {
            StorageSnafu {
                message: format!("read {key}: {e:?}"),
            }
            .build()
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(|e| {
            StorageSnafu {
                message: format!("write {key}: {e:?}"),
            }
            .build()
        })
    }
}
