//! The palette collection store.
//!
//! Two independently keyed lists (created, favorites) plus the legacy
//! create-page list, each a JSON array in a [`KeyValueStore`]. Reads
//! degrade to an empty list (or skip bad entries) and writes fail silently: every storage problem
//! is logged and the caller's in-memory state stays authoritative for the
//! session.

use std::sync::Arc;

use inspira_core::palette::{CollectionList, PaletteDraft, PaletteRecord};
use inspira_events::{ChangeKind, CollectionEvent, EventBus};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::keys::{key_for, LEGACY_CREATED_KEY};
use crate::kv::KeyValueStore;

/// Created/favorite palette persistence over an injected storage backend.
pub struct CollectionStore<S> {
    storage: S,
    events: Option<Arc<EventBus>>,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            events: None,
        }
    }

    /// Publish a [`CollectionEvent`] on `bus` after every successful write.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ---- created ----

    /// Insert or replace `record` in the created list.
    pub fn add_created(&self, record: PaletteRecord) {
        self.add(CollectionList::Created, record);
    }

    pub fn remove_created(&self, id: &str) {
        self.remove(CollectionList::Created, id);
    }

    pub fn get_created(&self) -> Vec<PaletteRecord> {
        self.get(CollectionList::Created)
    }

    // ---- favorites ----

    /// Insert or replace `record` in the favorites list.
    pub fn add_favorite(&self, record: PaletteRecord) {
        self.add(CollectionList::Favorites, record);
    }

    pub fn remove_favorite(&self, id: &str) {
        self.remove(CollectionList::Favorites, id);
    }

    pub fn get_favorites(&self) -> Vec<PaletteRecord> {
        self.get(CollectionList::Favorites)
    }

    // ---- combined ----

    /// All created records followed by all favorites, each in stored order.
    pub fn get_all(&self) -> Vec<PaletteRecord> {
        let mut all = self.get_created();
        all.extend(self.get_favorites());
        all
    }

    /// Insert `record` into `list`, replacing any entry with the same id.
    ///
    /// The record's type is set to the list's type. A replaced record moves
    /// to the end of the list.
    pub fn add(&self, list: CollectionList, mut record: PaletteRecord) {
        record.palette_type = list.palette_type();
        let id = record.id.clone();

        let mut records = self.get(list);
        records.retain(|r| r.id != id);
        records.push(record);

        if self.write_json(key_for(list), &records) {
            tracing::debug!(list = list.as_str(), palette_id = %id, "Stored collection record");
            self.publish(CollectionEvent::upserted(list, id));
        }
    }

    /// Remove `id` from `list`. Absent ids are a no-op.
    pub fn remove(&self, list: CollectionList, id: &str) {
        let mut records = self.get(list);
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            tracing::debug!(list = list.as_str(), palette_id = %id, "Remove skipped, id not in list");
            return;
        }

        if self.write_json(key_for(list), &records) {
            tracing::debug!(list = list.as_str(), palette_id = %id, "Removed collection record");
            self.publish(CollectionEvent::removed(list, id));
        }
    }

    /// Decode `list`; absent, unreadable or non-array data yields an empty
    /// list and malformed entries are skipped.
    pub fn get(&self, list: CollectionList) -> Vec<PaletteRecord> {
        self.read_json(key_for(list))
    }

    /// Overwrite `list` wholesale.
    pub fn replace(&self, list: CollectionList, records: &[PaletteRecord]) {
        if self.write_json(key_for(list), records) {
            self.publish(CollectionEvent::new(list, ChangeKind::Replaced));
        }
    }

    // ---- legacy create-page list ----

    /// Drafts saved by the create page under the legacy key.
    pub fn legacy_drafts(&self) -> Vec<PaletteDraft> {
        self.read_json(LEGACY_CREATED_KEY)
    }

    /// Overwrite the legacy create-page list.
    pub fn save_legacy_drafts(&self, drafts: &[PaletteDraft]) {
        self.write_json(LEGACY_CREATED_KEY, drafts);
    }

    // ---- private helpers ----

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        let items: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "Malformed collection data, treating as empty");
                return Vec::new();
            }
        };

        // Entries are decoded one by one so a single bad entry does not hide
        // the rest of the list.
        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                serde_json::from_value(item)
                    .inspect_err(|e| {
                        tracing::warn!(key, index, error = %e, "Skipping malformed collection entry");
                    })
                    .ok()
            })
            .collect()
    }

    /// Serialize and store `value`. Returns whether the write succeeded.
    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to encode collection");
                return false;
            }
        };

        match self.storage.set(key, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to write collection");
                false
            }
        }
    }

    fn publish(&self, event: CollectionEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{COLLECTION_CREATED_KEY, COLLECTION_FAVORITES_KEY};
    use crate::kv::MemoryStore;
    use chrono::Utc;
    use inspira_core::palette::{Palette, PaletteType};

    fn store() -> CollectionStore<MemoryStore> {
        CollectionStore::new(MemoryStore::new())
    }

    fn created(id: &str, name: &str) -> PaletteRecord {
        PaletteRecord {
            id: id.into(),
            name: name.into(),
            colors: vec!["#111111".into(); 5],
            palette_type: PaletteType::Created,
            date_created: "2024-05-01T10:00:00.000Z".into(),
            tags: None,
            source: None,
        }
    }

    fn favorite(id: &str) -> PaletteRecord {
        let palette = Palette::new(id, "Fav", &["#222222"]).with_source("Curated");
        PaletteRecord::favorite_from(&palette, Utc::now())
    }

    fn ids(records: &[PaletteRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    // -- add / get --

    #[test]
    fn add_created_then_get_contains_exactly_one() {
        let store = store();
        store.add_created(created("a", "One"));
        let list = store.get_created();
        assert_eq!(list.iter().filter(|r| r.id == "a").count(), 1);
    }

    #[test]
    fn re_adding_same_id_replaces_and_moves_to_end() {
        let store = store();
        store.add_created(created("a", "One"));
        store.add_created(created("b", "Two"));
        store.add_created(created("a", "One again"));

        let list = store.get_created();
        assert_eq!(ids(&list), ["b", "a"]);
        assert_eq!(list[1].name, "One again");
    }

    #[test]
    fn add_tags_record_with_list_type() {
        let store = store();
        store.add_favorite(created("x", "Mislabeled"));
        assert_eq!(store.get_favorites()[0].palette_type, PaletteType::Favorite);
    }

    #[test]
    fn lists_are_independent() {
        let store = store();
        store.add_created(created("same", "c"));
        store.add_favorite(favorite("same"));
        store.remove_favorite("same");
        assert_eq!(ids(&store.get_created()), ["same"]);
        assert!(store.get_favorites().is_empty());
    }

    // -- remove --

    #[test]
    fn remove_unknown_favorite_leaves_list_unchanged() {
        let store = store();
        store.add_favorite(favorite("f1"));
        let before = store.get_favorites();
        store.remove_favorite("nope");
        assert_eq!(store.get_favorites(), before);
    }

    #[test]
    fn remove_created_drops_record() {
        let store = store();
        store.add_created(created("a", "One"));
        store.add_created(created("b", "Two"));
        store.remove_created("a");
        assert_eq!(ids(&store.get_created()), ["b"]);
    }

    // -- get_all --

    #[test]
    fn get_all_is_created_then_favorites() {
        let store = store();
        store.add_favorite(favorite("f1"));
        store.add_created(created("c1", "x"));
        store.add_favorite(favorite("f2"));
        store.add_created(created("c2", "y"));

        let all = store.get_all();
        assert_eq!(ids(&all), ["c1", "c2", "f1", "f2"]);
        assert_eq!(
            all.len(),
            store.get_created().len() + store.get_favorites().len()
        );
    }

    // -- degraded storage --

    #[test]
    fn malformed_json_reads_as_empty() {
        let store = store();
        store.storage().set(COLLECTION_CREATED_KEY, "{not json").unwrap();
        assert!(store.get_created().is_empty());

        store.storage().set(COLLECTION_FAVORITES_KEY, r#"{"id":"1"}"#).unwrap();
        assert!(store.get_favorites().is_empty());
    }

    #[test]
    fn malformed_entry_is_skipped_and_rest_survives_add() {
        let store = store();
        let raw = r##"[
            {"id":"good","name":"Kept","colors":["#111111"],"type":"created","dateCreated":"2024-05-01T10:00:00.000Z"},
            {"id":"bad","name":"Odd","colors":["#222222"],"type":"mystery","dateCreated":"2024-05-01T10:00:00.000Z"},
            42
        ]"##;
        store.storage().set(COLLECTION_CREATED_KEY, raw).unwrap();
        assert_eq!(ids(&store.get_created()), ["good"]);

        store.add_created(created("new", "Added"));
        assert_eq!(ids(&store.get_created()), ["good", "new"]);
    }

    #[test]
    fn malformed_list_is_overwritten_by_next_add() {
        let store = store();
        store.storage().set(COLLECTION_CREATED_KEY, "garbage").unwrap();
        store.add_created(created("a", "One"));
        assert_eq!(ids(&store.get_created()), ["a"]);
    }

    #[test]
    fn reads_records_written_by_other_clients() {
        let store = store();
        let raw = r##"[{"id":"1","name":"Dusk","colors":["#111111"],"type":"created","dateCreated":"2024-05-01T10:00:00.000Z","tags":["night"]}]"##;
        store.storage().set(COLLECTION_CREATED_KEY, raw).unwrap();
        let list = store.get_created();
        assert_eq!(list[0].tag_list(), ["night".to_string()]);
    }

    #[test]
    fn quota_exceeded_write_is_swallowed() {
        let store = CollectionStore::new(MemoryStore::with_quota(300));
        store.add_created(created("a", "One"));
        let before = store.get_created();
        assert_eq!(before.len(), 1);

        // Second record pushes the list past the quota.
        store.add_created(created("b", &"long name ".repeat(20)));
        assert_eq!(store.get_created(), before);
    }

    // -- legacy list --

    #[test]
    fn legacy_drafts_round_trip() {
        let store = store();
        assert!(store.legacy_drafts().is_empty());
        let mut draft = PaletteDraft::blank(Utc::now());
        draft.name = "Saved".into();
        store.save_legacy_drafts(std::slice::from_ref(&draft));
        assert_eq!(store.legacy_drafts(), vec![draft]);
        // Legacy writes never touch the collection lists.
        assert!(store.get_all().is_empty());
    }

    // -- events --

    #[tokio::test]
    async fn successful_writes_publish_events() {
        let bus = Arc::new(EventBus::default());
        let mut rx = bus.subscribe();
        let store = store().with_events(Arc::clone(&bus));

        store.add_favorite(favorite("f1"));
        store.remove_favorite("missing");
        store.remove_favorite("f1");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.change, ChangeKind::Upserted);
        assert_eq!(first.list, CollectionList::Favorites);
        let second = rx.recv().await.unwrap();
        assert_eq!(second.change, ChangeKind::Removed);
        assert_eq!(second.palette_id.as_deref(), Some("f1"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn failed_write_publishes_nothing() {
        let bus = Arc::new(EventBus::default());
        let mut rx = bus.subscribe();
        let store = CollectionStore::new(MemoryStore::with_quota(1)).with_events(Arc::clone(&bus));
        store.add_created(created("a", "One"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn replace_rewrites_list() {
        let store = store();
        store.add_created(created("a", "One"));
        store.replace(CollectionList::Created, &[created("z", "Z")]);
        assert_eq!(ids(&store.get_created()), ["z"]);
    }
}
