//! Palette domain types.
//!
//! - [`Palette`]: a palette as served by the browse API.
//! - [`PaletteRecord`]: the unit stored in a user's collection and filtered
//!   by [`crate::filter`].
//! - [`PaletteDraft`]: the working palette on the create page, also the
//!   element type of the legacy saved-palettes list.
//! - [`PaletteDetail`]: the expanded view returned by `/api/palette/{id}`.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{PaletteId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of colors in a palette built on the create page.
pub const PALETTE_SIZE: usize = 5;

/// Placeholder color used for unset swatches of a fresh draft.
pub const PLACEHOLDER_COLOR: &str = "#D9D9D9";

/// Maximum length of a palette name or style label.
pub const MAX_LABEL_LEN: u64 = 80;

// ---------------------------------------------------------------------------
// Provenance
// ---------------------------------------------------------------------------

/// Provenance tag of a collection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Created,
    Favorite,
}

impl PaletteType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Favorite => "favorite",
        }
    }
}

/// The two independently persisted collection lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionList {
    Created,
    Favorites,
}

impl CollectionList {
    /// Both lists, in the order they are merged for display.
    pub const ALL: [CollectionList; 2] = [CollectionList::Created, CollectionList::Favorites];

    /// Record type stored in this list.
    pub fn palette_type(self) -> PaletteType {
        match self {
            Self::Created => PaletteType::Created,
            Self::Favorites => PaletteType::Favorite,
        }
    }

    /// List that owns records of the given type.
    pub fn for_type(palette_type: PaletteType) -> Self {
        match palette_type {
            PaletteType::Created => Self::Created,
            PaletteType::Favorite => Self::Favorites,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Favorites => "favorites",
        }
    }
}

// ---------------------------------------------------------------------------
// Palette (browse API payload)
// ---------------------------------------------------------------------------

/// A palette returned by the browse API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: PaletteId,
    pub name: String,
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Palette {
    pub fn new(id: impl Into<String>, name: impl Into<String>, colors: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            source: None,
            tags: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Expanded palette information served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDetail {
    pub id: PaletteId,
    pub name: String,
    pub colors: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub downloads: u32,
    pub likes: u32,
    pub source: String,
}

// ---------------------------------------------------------------------------
// PaletteRecord (collection entry)
// ---------------------------------------------------------------------------

/// A palette stored in the user's collection.
///
/// Field names on the wire match the persisted layout (`type`,
/// `dateCreated`), so previously stored lists decode unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRecord {
    pub id: PaletteId,
    pub name: String,
    pub colors: Vec<String>,
    #[serde(rename = "type")]
    pub palette_type: PaletteType,
    /// ISO-8601 timestamp, kept as the raw string that was stored.
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl PaletteRecord {
    /// Build a `created` record from a saved draft. The draft's style label
    /// is not carried into the collection.
    pub fn created_from(draft: &PaletteDraft) -> Self {
        Self {
            id: draft.id.clone(),
            name: draft.name.clone(),
            colors: draft.colors.clone(),
            palette_type: PaletteType::Created,
            date_created: draft.date_created.clone(),
            tags: None,
            source: None,
        }
    }

    /// Build a `favorite` record from a browsed palette, dated `now`.
    pub fn favorite_from(palette: &Palette, now: Timestamp) -> Self {
        Self {
            id: palette.id.clone(),
            name: palette.name.clone(),
            colors: palette.colors.clone(),
            palette_type: PaletteType::Favorite,
            date_created: iso_timestamp(now),
            tags: palette.tags.clone(),
            source: palette.source.clone(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Tags attached to the record, empty when none were stored.
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Parse `date_created`.
    ///
    /// Accepts RFC 3339 timestamps, offset-less date-times (interpreted in
    /// local time) and bare dates (interpreted as UTC midnight). Returns
    /// `None` for anything else.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.date_created)
    }
}

/// Format a timestamp the way records store it: RFC 3339, millisecond
/// precision, `Z` suffix.
pub fn iso_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|ts| ts.fixed_offset());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

// ---------------------------------------------------------------------------
// PaletteDraft (create page)
// ---------------------------------------------------------------------------

/// The palette being edited on the create page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PaletteDraft {
    pub id: PaletteId,
    #[validate(length(max = MAX_LABEL_LEN, message = "Palette name is too long"))]
    pub name: String,
    #[validate(length(max = MAX_LABEL_LEN, message = "Style is too long"))]
    pub style: String,
    pub colors: Vec<String>,
    #[serde(rename = "dateCreated")]
    pub date_created: String,
}

impl PaletteDraft {
    /// A blank draft: fresh id, empty name and style, placeholder colors.
    pub fn blank(now: Timestamp) -> Self {
        Self {
            id: new_palette_id(),
            name: String::new(),
            style: String::new(),
            colors: vec![PLACEHOLDER_COLOR.to_string(); PALETTE_SIZE],
            date_created: iso_timestamp(now),
        }
    }

    /// Replace the color at `index`.
    pub fn set_color(&mut self, index: usize, color: impl Into<String>) -> Result<(), CoreError> {
        let len = self.colors.len();
        let slot = self.colors.get_mut(index).ok_or_else(|| {
            CoreError::Validation(format!("Color index {index} out of range (0..{len})"))
        })?;
        *slot = color.into();
        Ok(())
    }

    /// `true` while every swatch still holds the placeholder color.
    pub fn is_placeholder(&self) -> bool {
        self.colors
            .iter()
            .all(|c| c.eq_ignore_ascii_case(PLACEHOLDER_COLOR))
    }

    /// Check the draft can be saved to the collection.
    pub fn validate_for_save(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please enter a name for your palette".into(),
            ));
        }
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }

    /// Check the draft can be exported as an image.
    pub fn validate_for_export(&self) -> Result<(), CoreError> {
        if self.is_placeholder() {
            return Err(CoreError::Validation(
                "Please customize your colors before downloading".into(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please enter a name for your palette before downloading".into(),
            ));
        }
        Ok(())
    }
}

/// Generate an identifier for a locally created palette.
pub fn new_palette_id() -> PaletteId {
    uuid::Uuid::now_v7().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Duration;

    fn record_json() -> &'static str {
        r##"{"id":"1","name":"Dusk","colors":["#111111"],"type":"created","dateCreated":"2024-05-01T10:00:00.000Z"}"##
    }

    // -- Serialization --

    #[test]
    fn record_uses_persisted_field_names() {
        let record: PaletteRecord = serde_json::from_str(record_json()).unwrap();
        assert_eq!(record.palette_type, PaletteType::Created);
        assert_eq!(record.date_created, "2024-05-01T10:00:00.000Z");
        assert!(record.tags.is_none());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "created");
        assert!(value.get("dateCreated").is_some());
        assert!(value.get("tags").is_none());
        assert!(value.get("source").is_none());
    }

    #[test]
    fn record_rejects_unknown_type() {
        let raw = record_json().replace("\"created\"", "\"liked\"");
        assert!(serde_json::from_str::<PaletteRecord>(&raw).is_err());
    }

    // -- Timestamps --

    #[test]
    fn created_at_parses_rfc3339() {
        let record: PaletteRecord = serde_json::from_str(record_json()).unwrap();
        let ts = record.created_at().unwrap();
        assert_eq!(ts.with_timezone(&Utc).to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn created_at_accepts_bare_date() {
        let mut record: PaletteRecord = serde_json::from_str(record_json()).unwrap();
        record.date_created = "2024-05-01".into();
        let ts = record.created_at().unwrap();
        assert_eq!(ts.with_timezone(&Utc).to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn created_at_is_none_for_garbage() {
        let mut record: PaletteRecord = serde_json::from_str(record_json()).unwrap();
        record.date_created = "yesterday-ish".into();
        assert!(record.created_at().is_none());
    }

    #[test]
    fn iso_timestamp_round_trips_through_created_at() {
        let now = Utc::now();
        let palette = Palette::new("p", "Sea", &["#000000"]);
        let record = PaletteRecord::favorite_from(&palette, now);
        let parsed = record.created_at().unwrap().with_timezone(&Utc);
        assert!((parsed - now).abs() < Duration::milliseconds(1));
        assert!(record.date_created.ends_with('Z'));
    }

    // -- Conversions --

    #[test]
    fn favorite_keeps_source_and_tags() {
        let mut palette = Palette::new("beach-1", "Sunset Beach", &["#FF7F50"]).with_source("Curated");
        palette.tags = Some(vec!["beach".into()]);
        let record = PaletteRecord::favorite_from(&palette, Utc::now());
        assert_eq!(record.palette_type, PaletteType::Favorite);
        assert_eq!(record.source.as_deref(), Some("Curated"));
        assert_eq!(record.tag_list(), ["beach".to_string()]);
    }

    #[test]
    fn created_drops_style() {
        let mut draft = PaletteDraft::blank(Utc::now());
        draft.name = "Mine".into();
        draft.style = "Minimal".into();
        let record = PaletteRecord::created_from(&draft);
        assert_eq!(record.id, draft.id);
        assert_eq!(record.palette_type, PaletteType::Created);
        assert_eq!(record.date_created, draft.date_created);
        assert!(record.source.is_none());
    }

    #[test]
    fn list_and_type_map_both_ways() {
        for list in CollectionList::ALL {
            assert_eq!(CollectionList::for_type(list.palette_type()), list);
        }
    }

    // -- Drafts --

    #[test]
    fn blank_draft_is_placeholder() {
        let draft = PaletteDraft::blank(Utc::now());
        assert_eq!(draft.colors.len(), PALETTE_SIZE);
        assert!(draft.is_placeholder());
    }

    #[test]
    fn set_color_out_of_range_is_rejected() {
        let mut draft = PaletteDraft::blank(Utc::now());
        assert!(draft.set_color(4, "#123456").is_ok());
        assert!(!draft.is_placeholder());
        assert_matches!(draft.set_color(5, "#123456"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn save_requires_non_blank_name() {
        let mut draft = PaletteDraft::blank(Utc::now());
        draft.name = "   ".into();
        assert_matches!(
            draft.validate_for_save(),
            Err(CoreError::Validation(msg)) if msg == "Please enter a name for your palette"
        );
        draft.name = "Moss".into();
        assert!(draft.validate_for_save().is_ok());
    }

    #[test]
    fn save_rejects_overlong_name() {
        let mut draft = PaletteDraft::blank(Utc::now());
        draft.name = "x".repeat(MAX_LABEL_LEN as usize + 1);
        assert_matches!(draft.validate_for_save(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn export_checks_colors_before_name() {
        let mut draft = PaletteDraft::blank(Utc::now());
        assert_matches!(
            draft.validate_for_export(),
            Err(CoreError::Validation(msg)) if msg.contains("customize your colors")
        );
        draft.set_color(0, "#ff0000").unwrap();
        assert_matches!(
            draft.validate_for_export(),
            Err(CoreError::Validation(msg)) if msg.contains("before downloading")
        );
        draft.name = "Red".into();
        assert!(draft.validate_for_export().is_ok());
    }
}
