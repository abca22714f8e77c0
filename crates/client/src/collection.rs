//! Collection page state over the persisted created and favorite lists.

use chrono::{DateTime, TimeZone};
use inspira_core::filter::{available_tags, filter_records, filter_records_now, CollectionFilter, CollectionSummary};
use inspira_core::palette::{CollectionList, PaletteRecord};
use inspira_db::{CollectionStore, KeyValueStore};

/// Why the visible list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been created or favorited yet.
    EmptyCollection,
    /// Records exist but none pass the current filter.
    NoMatches,
}

pub struct CollectionView<S> {
    store: CollectionStore<S>,
    records: Vec<PaletteRecord>,
    filter: CollectionFilter,
}

impl<S: KeyValueStore> CollectionView<S> {
    pub fn load(store: CollectionStore<S>) -> Self {
        let records = store.get_all();
        Self {
            store,
            records,
            filter: CollectionFilter::default(),
        }
    }

    /// Re-read both lists from storage, keeping the current filter.
    pub fn reload(&mut self) {
        self.records = self.store.get_all();
        tracing::debug!(records = self.records.len(), "Reloaded collection");
    }

    pub fn store(&self) -> &CollectionStore<S> {
        &self.store
    }

    /// Every record, created first then favorites.
    pub fn records(&self) -> &[PaletteRecord] {
        &self.records
    }

    pub fn filter(&self) -> &CollectionFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CollectionFilter) {
        self.filter = filter;
    }

    pub fn filter_mut(&mut self) -> &mut CollectionFilter {
        &mut self.filter
    }

    /// Records passing the current filter, evaluated against local now.
    pub fn visible(&self) -> Vec<PaletteRecord> {
        filter_records_now(&self.records, &self.filter)
    }

    /// Records passing the current filter, evaluated against `now`.
    pub fn visible_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<PaletteRecord> {
        filter_records(&self.records, &self.filter, now)
    }

    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary::of(&self.records)
    }

    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.records)
    }

    /// Remove `id` from the list its record belongs to. Returns `false` for
    /// an unknown id.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(record) = self.records.iter().find(|r| r.id == id) else {
            tracing::debug!(palette_id = %id, "Remove ignored, id not in collection");
            return false;
        };
        let list = CollectionList::for_type(record.palette_type);
        self.store.remove(list, id);
        self.reload();
        true
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.records.is_empty() {
            Some(EmptyState::EmptyCollection)
        } else if self.visible().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
