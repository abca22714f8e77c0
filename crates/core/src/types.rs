/// Palette identifiers are opaque strings (UUIDs for locally created
/// palettes, `<tag>-<n>` for palettes served by the API).
pub type PaletteId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
