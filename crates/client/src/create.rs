//! Create page state: the palette being edited and the saved drafts list.

use std::path::{Path, PathBuf};

use chrono::Utc;
use inspira_core::error::CoreError;
use inspira_core::export::export_png;
use inspira_core::palette::{iso_timestamp, new_palette_id, PaletteDraft, PaletteRecord};
use inspira_db::{CollectionStore, KeyValueStore};

pub struct CreateSession<S> {
    store: CollectionStore<S>,
    draft: PaletteDraft,
    saved: Vec<PaletteDraft>,
}

impl<S: KeyValueStore> CreateSession<S> {
    /// Start with a blank draft and the previously saved drafts.
    pub fn new(store: CollectionStore<S>) -> Self {
        let saved = store.legacy_drafts();
        Self {
            store,
            draft: PaletteDraft::blank(Utc::now()),
            saved,
        }
    }

    pub fn draft(&self) -> &PaletteDraft {
        &self.draft
    }

    pub fn saved(&self) -> &[PaletteDraft] {
        &self.saved
    }

    pub fn store(&self) -> &CollectionStore<S> {
        &self.store
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.draft.style = style.into();
    }

    pub fn set_color(&mut self, index: usize, color: impl Into<String>) -> Result<(), CoreError> {
        self.draft.set_color(index, color)
    }

    /// Save the draft to the saved list and the collection, then start a
    /// fresh draft.
    pub fn save(&mut self) -> Result<PaletteRecord, CoreError> {
        self.draft.validate_for_save()?;

        let mut saved = self.draft.clone();
        saved.id = new_palette_id();
        saved.date_created = iso_timestamp(Utc::now());

        self.saved.push(saved.clone());
        self.store.save_legacy_drafts(&self.saved);

        let record = PaletteRecord::created_from(&saved);
        self.store.add_created(record.clone());
        tracing::info!(palette_id = %record.id, name = %record.name, "Saved palette");

        self.draft = PaletteDraft::blank(Utc::now());
        Ok(record)
    }

    /// Remove a draft from the saved list. The collection copy is kept.
    pub fn remove_saved(&mut self, id: &str) {
        let before = self.saved.len();
        self.saved.retain(|d| d.id != id);
        if self.saved.len() != before {
            self.store.save_legacy_drafts(&self.saved);
        }
    }

    /// Load a saved draft back into the editor.
    pub fn edit_saved(&mut self, id: &str) -> Result<(), CoreError> {
        let draft = self
            .saved
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "palette",
                id: id.to_string(),
            })?;
        self.draft = draft;
        Ok(())
    }

    /// Render the draft to `<dir>/<name>.png`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, CoreError> {
        self.draft.validate_for_export()?;
        export_png(dir, &self.draft.name, &self.draft.colors)
    }
}
