//! Browse page state: tag list, palettes for the selected tag, favorites.

use chrono::Utc;
use inspira_core::palette::{Palette, PaletteRecord};
use inspira_db::{CollectionStore, KeyValueStore};

use crate::api::{PaletteApi, PaletteSource};
use crate::config::{ClientConfig, DEFAULT_PALETTE_COUNT};
use crate::fallback::{demo_palettes, fallback_tags};

pub const TAGS_WARNING: &str = "Failed to load tags";
pub const PALETTES_WARNING: &str = "Failed to load palettes - showing demo data";
pub const CACHED_WARNING: &str = "Using cached data - some features may be limited";

/// Data plus an optional non-blocking warning for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub warning: Option<String>,
}

impl<T> Loaded<T> {
    fn ok(data: T) -> Self {
        Self { data, warning: None }
    }

    fn warn(data: T, warning: &str) -> Self {
        Self {
            data,
            warning: Some(warning.to_string()),
        }
    }
}

/// Fetches browse data, substituting static fallbacks on failure.
pub struct BrowseService<P> {
    source: P,
    count: u32,
}

impl<P: PaletteSource> BrowseService<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            count: DEFAULT_PALETTE_COUNT,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Palettes requested per load.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub async fn load_tags(&self) -> Loaded<Vec<String>> {
        match self.source.tags().await {
            Ok(tags) => Loaded::ok(tags),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load tags, using fallback list");
                Loaded::warn(fallback_tags(), TAGS_WARNING)
            }
        }
    }

    pub async fn load_palettes(&self, tag: &str) -> Loaded<Vec<Palette>> {
        match self.source.palettes(tag, self.count).await {
            Ok(body) => {
                if let Some(error) = &body.error {
                    tracing::info!(tag, server_error = %error, "Server answered from fallback data");
                    Loaded::warn(body.palettes, CACHED_WARNING)
                } else {
                    Loaded::ok(body.palettes)
                }
            }
            Err(e) => {
                tracing::warn!(tag, error = %e, "Failed to load palettes, using demo data");
                Loaded::warn(demo_palettes(tag), PALETTES_WARNING)
            }
        }
    }
}

impl BrowseService<PaletteApi> {
    /// HTTP-backed service using the configured API URL and page size.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(PaletteApi::from_config(config)).with_count(config.palette_count)
    }
}

/// One browse page session.
pub struct BrowseSession<P, S> {
    service: BrowseService<P>,
    store: CollectionStore<S>,
    tags: Vec<String>,
    selected_tag: Option<String>,
    palettes: Vec<Palette>,
    warning: Option<String>,
}

impl<P: PaletteSource, S: KeyValueStore> BrowseSession<P, S> {
    /// Load the tag list and the palettes of the first tag.
    pub async fn start(service: BrowseService<P>, store: CollectionStore<S>) -> Self {
        let mut session = Self {
            service,
            store,
            tags: Vec::new(),
            selected_tag: None,
            palettes: Vec::new(),
            warning: None,
        };

        let tags = session.service.load_tags().await;
        session.tags = tags.data;

        if let Some(first) = session.tags.first().cloned() {
            session.select_tag(&first).await;
        }
        // The tag-list warning shows when the first palette load has none.
        if session.warning.is_none() {
            session.warning = tags.warning;
        }
        session
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn store(&self) -> &CollectionStore<S> {
        &self.store
    }

    /// Switch to `tag` and replace the palette list.
    pub async fn select_tag(&mut self, tag: &str) {
        self.selected_tag = Some(tag.to_string());
        let loaded = self.service.load_palettes(tag).await;
        self.palettes = loaded.data;
        self.warning = loaded.warning;
    }

    /// Append another page for the selected tag.
    pub async fn load_more(&mut self) {
        let Some(tag) = self.selected_tag.clone() else {
            return;
        };
        let loaded = self.service.load_palettes(&tag).await;
        self.palettes.extend(loaded.data);
        self.warning = loaded.warning;
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Store `palette` as a favorite dated now.
    ///
    /// A palette without tags is tagged with the selected browse tag so the
    /// collection's tag filter can find it.
    pub fn favorite(&self, palette: &Palette) -> PaletteRecord {
        let mut record = PaletteRecord::favorite_from(palette, Utc::now());
        if record.tags.is_none() {
            if let Some(tag) = &self.selected_tag {
                record = record.with_tags([tag.clone()]);
            }
        }
        self.store.add_favorite(record.clone());
        record
    }

    pub fn unfavorite(&self, id: &str) {
        self.store.remove_favorite(id);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.store.get_favorites().iter().any(|r| r.id == id)
    }

    /// Favorite `palette` if it is not yet a favorite, otherwise remove it.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle_favorite(&self, palette: &Palette) -> bool {
        if self.is_favorite(&palette.id) {
            self.unfavorite(&palette.id);
            false
        } else {
            self.favorite(palette);
            true
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
