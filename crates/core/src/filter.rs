//! Collection filter engine.
//!
//! A pure reduction of a record list by a [`CollectionFilter`]: text query,
//! record type, date range and tag intersection, ANDed together. Filtering
//! never reorders its input.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Local, Months, TimeZone};
use serde::{Deserialize, Serialize};

use crate::palette::{PaletteRecord, PaletteType};

// ---------------------------------------------------------------------------
// Filter definition
// ---------------------------------------------------------------------------

/// Record type predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Created,
    Favorite,
}

impl TypeFilter {
    fn matches(self, palette_type: PaletteType) -> bool {
        match self {
            Self::All => true,
            Self::Created => palette_type == PaletteType::Created,
            Self::Favorite => palette_type == PaletteType::Favorite,
        }
    }
}

/// Date range predicate, relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
}

impl DateRange {
    /// Earliest accepted creation time, or `None` when no cutoff applies.
    ///
    /// - `Today`: midnight at the start of `now`'s calendar day.
    /// - `Week`: exactly seven days before `now`.
    /// - `Month` / `Year`: one / twelve calendar months before `now`,
    ///   clamped to the last day of a shorter month.
    pub fn cutoff<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            Self::All => None,
            Self::Today => {
                let midnight = now.date_naive().and_hms_opt(0, 0, 0)?;
                now.timezone().from_local_datetime(&midnight).earliest()
            }
            Self::Week => Some(now.clone() - Duration::days(7)),
            Self::Month => now.clone().checked_sub_months(Months::new(1)),
            Self::Year => now.clone().checked_sub_months(Months::new(12)),
        }
    }
}

/// The four independent collection predicates. `Default` matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionFilter {
    pub query: String,
    #[serde(rename = "type")]
    pub palette_type: TypeFilter,
    pub date_range: DateRange,
    pub tags: Vec<String>,
}

impl CollectionFilter {
    /// `true` when no predicate constrains the result.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Add `tag` to the tag set, or remove it if already present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Reset every predicate to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Evaluate all predicates against a single record.
    pub fn matches<Tz: TimeZone>(&self, record: &PaletteRecord, cutoff: Option<&DateTime<Tz>>) -> bool {
        self.matches_query(record)
            && self.palette_type.matches(record.palette_type)
            && matches_cutoff(record, cutoff)
            && self.matches_tags(record)
    }

    fn matches_query(&self, record: &PaletteRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record
                .tag_list()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    fn matches_tags(&self, record: &PaletteRecord) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        record.tag_list().iter().any(|tag| self.tags.contains(tag))
    }
}

fn matches_cutoff<Tz: TimeZone>(record: &PaletteRecord, cutoff: Option<&DateTime<Tz>>) -> bool {
    match cutoff {
        None => true,
        // Unparseable dates never satisfy a cutoff.
        Some(cutoff) => record.created_at().is_some_and(|created| created >= *cutoff),
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Filter `records` relative to `now`, preserving input order.
pub fn filter_records<Tz: TimeZone>(
    records: &[PaletteRecord],
    filter: &CollectionFilter,
    now: &DateTime<Tz>,
) -> Vec<PaletteRecord> {
    let cutoff = filter.date_range.cutoff(now);
    records
        .iter()
        .filter(|record| filter.matches(record, cutoff.as_ref()))
        .cloned()
        .collect()
}

/// [`filter_records`] against the current local time.
pub fn filter_records_now(records: &[PaletteRecord], filter: &CollectionFilter) -> Vec<PaletteRecord> {
    filter_records(records, filter, &Local::now())
}

// ---------------------------------------------------------------------------
// Collection helpers
// ---------------------------------------------------------------------------

/// Every distinct tag across `records`, in first-seen order.
pub fn available_tags(records: &[PaletteRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|r| r.tag_list())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Per-type record counts for the collection header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CollectionSummary {
    pub created: usize,
    pub favorites: usize,
    pub total: usize,
}

impl CollectionSummary {
    pub fn of(records: &[PaletteRecord]) -> Self {
        let created = records
            .iter()
            .filter(|r| r.palette_type == PaletteType::Created)
            .count();
        Self {
            created,
            favorites: records.len() - created,
            total: records.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
