//! Profile settings persisted next to the collection.
//!
//! Three independent string keys. Absent or empty values fall back to the
//! built-in defaults; storage failures are logged and swallowed exactly as
//! in [`CollectionStore`](crate::CollectionStore).

use inspira_core::error::CoreError;
use serde::Serialize;

use crate::keys::{SETTINGS_EMAIL_KEY, SETTINGS_IMAGE_KEY, SETTINGS_NAME_KEY};
use crate::kv::KeyValueStore;

pub const DEFAULT_NAME: &str = "Guy";
pub const DEFAULT_EMAIL: &str = "guy.@gmail.com";

/// Prefix every accepted profile picture carries.
const IMAGE_DATA_URL_PREFIX: &str = "data:image/";

/// The profile as shown on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// Custom picture; `None` shows the bundled default.
    pub profile_image: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            email: DEFAULT_EMAIL.into(),
            profile_image: None,
        }
    }
}

pub struct ProfileSettings<S> {
    storage: S,
}

impl<S: KeyValueStore> ProfileSettings<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current profile with defaults filled in.
    pub fn load(&self) -> Profile {
        let defaults = Profile::default();
        Profile {
            name: self.read(SETTINGS_NAME_KEY).unwrap_or(defaults.name),
            email: self.read(SETTINGS_EMAIL_KEY).unwrap_or(defaults.email),
            profile_image: self.read(SETTINGS_IMAGE_KEY),
        }
    }

    /// Store the trimmed name and return it.
    pub fn set_name(&self, name: &str) -> String {
        let name = name.trim().to_string();
        self.write(SETTINGS_NAME_KEY, &name);
        name
    }

    /// Store the trimmed email and return it.
    pub fn set_email(&self, email: &str) -> String {
        let email = email.trim().to_string();
        self.write(SETTINGS_EMAIL_KEY, &email);
        email
    }

    /// Store a profile picture given as an image data URL.
    pub fn set_profile_image(&self, data_url: &str) -> Result<(), CoreError> {
        if !data_url.starts_with(IMAGE_DATA_URL_PREFIX) {
            return Err(CoreError::Validation(
                "Profile picture must be an image".into(),
            ));
        }
        self.write(SETTINGS_IMAGE_KEY, data_url);
        Ok(())
    }

    // ---- private helpers ----

    /// Stored value, `None` when absent, empty or unreadable.
    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read setting, using default");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        match self.storage.set(key, value) {
            Ok(()) => tracing::debug!(key, "Stored setting"),
            Err(e) => tracing::error!(key, error = %e, "Failed to write setting"),
        }
    }
}
