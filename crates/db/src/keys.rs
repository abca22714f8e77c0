//! Persisted key layout.

use inspira_core::palette::CollectionList;

/// Superseded single-list blob backing the create page's saved list.
pub const LEGACY_CREATED_KEY: &str = "savedColorPalettes";

/// Created palettes shown on the collection page.
pub const COLLECTION_CREATED_KEY: &str = "collection:created";

/// Favorited palettes shown on the collection page.
pub const COLLECTION_FAVORITES_KEY: &str = "collection:favorites";

/// Storage key holding `list`.
pub fn key_for(list: CollectionList) -> &'static str {
    match list {
        CollectionList::Created => COLLECTION_CREATED_KEY,
        CollectionList::Favorites => COLLECTION_FAVORITES_KEY,
    }
}

/// Profile display name.
pub const SETTINGS_NAME_KEY: &str = "settings:name";

/// Profile email address.
pub const SETTINGS_EMAIL_KEY: &str = "settings:email";

/// Profile picture as a `data:image/...` URL.
pub const SETTINGS_IMAGE_KEY: &str = "settings:profileImage";
