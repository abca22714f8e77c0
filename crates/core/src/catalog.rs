//! Built-in palette catalog.
//!
//! Popular browse tags, the curated palettes per tag, palette generation
//! from per-theme base colors, and the fixed fallbacks served when every
//! other source is unavailable.

use crate::color::complementary_hex;
use crate::palette::{Palette, PaletteDetail};

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Tags offered by the browse carousel.
pub const POPULAR_TAGS: &[&str] = &[
    "autumn", "cold", "cyberpunk", "beach", "desert", "neon", "harvest", "frost", "vintage",
    "blossom", "storm", "ocean", "forest", "sunset", "gradient", "pastel", "warm", "monochrome",
    "tropical", "spring", "winter", "summer", "elegant", "cozy",
];

/// Check whether `tag` is one of [`POPULAR_TAGS`].
pub fn is_known_tag(tag: &str) -> bool {
    POPULAR_TAGS.contains(&tag)
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

pub const SOURCE_CURATED: &str = "Curated";
pub const SOURCE_GENERATED: &str = "Generated";
pub const SOURCE_FALLBACK: &str = "Fallback";
pub const SOURCE_COMMUNITY: &str = "Community";

// ---------------------------------------------------------------------------
// Curated palettes
// ---------------------------------------------------------------------------

struct CuratedEntry {
    name: &'static str,
    colors: [&'static str; 5],
}

const CURATED: &[(&str, &[CuratedEntry])] = &[
    (
        "autumn",
        &[
            CuratedEntry {
                name: "Autumn Leaves",
                colors: ["#8B4513", "#CD853F", "#D2691E", "#FF8C00", "#FFD700"],
            },
            CuratedEntry {
                name: "Harvest Moon",
                colors: ["#B8860B", "#DAA520", "#F4A460", "#DEB887", "#D2B48C"],
            },
        ],
    ),
    (
        "cyberpunk",
        &[
            CuratedEntry {
                name: "Neon Nights",
                colors: ["#FF00FF", "#00FFFF", "#FF1493", "#7FFF00", "#1E90FF"],
            },
            CuratedEntry {
                name: "Digital Dreams",
                colors: ["#FF0080", "#8000FF", "#0080FF", "#00FF80", "#FF8000"],
            },
        ],
    ),
    (
        "beach",
        &[
            CuratedEntry {
                name: "Ocean Breeze",
                colors: ["#4682B4", "#87CEEB", "#B0E0E6", "#F0F8FF", "#E0FFFF"],
            },
            CuratedEntry {
                name: "Sunset Beach",
                colors: ["#FF7F50", "#FF6347", "#FFD700", "#FFA500", "#FF69B4"],
            },
        ],
    ),
    (
        "cold",
        &[
            CuratedEntry {
                name: "Winter Frost",
                colors: ["#B0C4DE", "#E6E6FA", "#F0F8FF", "#F5F5F5", "#DCDCDC"],
            },
            CuratedEntry {
                name: "Arctic Chill",
                colors: ["#4169E1", "#6495ED", "#87CEEB", "#ADD8E6", "#E0F6FF"],
            },
        ],
    ),
    (
        "desert",
        &[
            CuratedEntry {
                name: "Desert Sand",
                colors: ["#DEB887", "#F4A460", "#D2B48C", "#BC9A6A", "#A0522D"],
            },
            CuratedEntry {
                name: "Cactus Bloom",
                colors: ["#8FBC8F", "#9ACD32", "#6B8E23", "#556B2F", "#808000"],
            },
        ],
    ),
];

fn curated_palette(tag: &str, index: usize, entry: &CuratedEntry) -> Palette {
    Palette::new(format!("{tag}-curated-{index}"), entry.name, &entry.colors)
        .with_source(SOURCE_CURATED)
}

/// Curated palettes for `tag`; empty for tags without curated entries.
pub fn curated_for(tag: &str) -> Vec<Palette> {
    CURATED
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(t, entries)| {
            entries
                .iter()
                .enumerate()
                .map(|(i, e)| curated_palette(t, i, e))
                .collect()
        })
        .unwrap_or_default()
}

/// Every curated palette across all tags.
pub fn all_curated() -> Vec<Palette> {
    CURATED
        .iter()
        .flat_map(|(tag, entries)| {
            entries
                .iter()
                .enumerate()
                .map(move |(i, e)| curated_palette(tag, i, e))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Generated palettes
// ---------------------------------------------------------------------------

const THEME_BASES: &[(&str, [&str; 4])] = &[
    ("autumn", ["#8B4513", "#CD853F", "#D2691E", "#FF8C00"]),
    ("cyberpunk", ["#FF00FF", "#00FFFF", "#FF1493", "#7FFF00"]),
    ("beach", ["#4682B4", "#87CEEB", "#20B2AA", "#FF7F50"]),
    ("cold", ["#B0C4DE", "#E6E6FA", "#F0F8FF", "#4169E1"]),
    ("desert", ["#DEB887", "#F4A460", "#D2B48C", "#CD853F"]),
    ("neon", ["#FF073A", "#39FF14", "#FF10F0", "#FFFF33"]),
    ("forest", ["#228B22", "#32CD32", "#90EE90", "#006400"]),
    ("sunset", ["#FF6B35", "#F7931E", "#FFD23F", "#EE4B2B"]),
];

const DEFAULT_THEME_BASE: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"];

fn theme_base(theme: &str) -> [&'static str; 4] {
    THEME_BASES
        .iter()
        .find(|(t, _)| *t == theme)
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_THEME_BASE)
}

/// Generate `count` palettes for `theme`: the theme's four base colors
/// followed by the complement of the first one.
pub fn generate_palettes(theme: &str, count: usize) -> Vec<Palette> {
    let base = theme_base(theme);
    // Base colors are compile-time constants, so the complement always parses.
    let complement = complementary_hex(base[0]).unwrap_or_else(|_| base[0].to_string());
    let mut colors: Vec<&str> = base.to_vec();
    colors.push(&complement);

    (0..count)
        .map(|i| {
            Palette::new(
                format!("{theme}-generated-{i}"),
                format!("{} Palette {}", title_case(theme), i + 1),
                &colors,
            )
            .with_source(SOURCE_GENERATED)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Last-resort palette for a tag with no curated entries.
pub fn fallback_palette(tag: &str) -> Palette {
    Palette::new(
        format!("{tag}-fallback"),
        format!("{} Palette", title_case(tag)),
        &["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57"],
    )
    .with_source(SOURCE_FALLBACK)
}

/// Sample detail record served for any palette id.
pub fn sample_detail(id: &str) -> PaletteDetail {
    PaletteDetail {
        id: id.to_string(),
        name: "Sample Palette".into(),
        colors: ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57"]
            .into_iter()
            .map(String::from)
            .collect(),
        description: "A vibrant and modern color palette perfect for digital designs.".into(),
        tags: ["modern", "vibrant", "digital"]
            .into_iter()
            .map(String::from)
            .collect(),
        downloads: 1250,
        likes: 89,
        source: SOURCE_COMMUNITY.into(),
    }
}

/// Uppercase the first letter of every word (`"cold front"` ->
/// `"Cold Front"`).
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_tags_are_unique() {
        let mut tags = POPULAR_TAGS.to_vec();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), POPULAR_TAGS.len());
        assert_eq!(POPULAR_TAGS.len(), 24);
    }

    #[test]
    fn curated_palettes_exist_only_for_some_tags() {
        let autumn = curated_for("autumn");
        assert_eq!(autumn.len(), 2);
        assert_eq!(autumn[0].name, "Autumn Leaves");
        assert_eq!(autumn[0].source.as_deref(), Some(SOURCE_CURATED));
        assert!(curated_for("neon").is_empty());
        assert_eq!(all_curated().len(), 10);
    }

    #[test]
    fn curated_ids_are_unique() {
        let mut ids: Vec<_> = all_curated().into_iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn generated_palettes_append_complement() {
        let palettes = generate_palettes("autumn", 2);
        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[1].id, "autumn-generated-1");
        assert_eq!(palettes[1].name, "Autumn Palette 2");
        assert_eq!(
            palettes[0].colors,
            ["#8B4513", "#CD853F", "#D2691E", "#FF8C00", "#74baec"]
        );
    }

    #[test]
    fn unknown_theme_uses_default_base() {
        let palettes = generate_palettes("vintage", 1);
        assert_eq!(palettes[0].colors[0], "#FF6B6B");
        assert_eq!(palettes[0].colors.len(), 5);
    }

    #[test]
    fn generate_zero_is_empty() {
        assert!(generate_palettes("neon", 0).is_empty());
    }

    #[test]
    fn title_case_handles_words() {
        assert_eq!(title_case("autumn"), "Autumn");
        assert_eq!(title_case("cold front"), "Cold Front");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn sample_detail_echoes_id() {
        let detail = sample_detail("beach-3");
        assert_eq!(detail.id, "beach-3");
        assert_eq!(detail.colors.len(), 5);
    }
}
