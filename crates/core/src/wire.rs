//! Browse API payloads shared by the server and the client.

use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// Body of `GET /api/palettes?tag=&count=`.
///
/// `error` is set when the server had to answer from fallback data; clients
/// surface it as a non-blocking warning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PalettesByTag {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub palettes: Vec<Palette>,
    #[serde(default)]
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `GET /api/palettes/trending?count=`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendingPalettes {
    pub palettes: Vec<Palette>,
    pub total: usize,
}
