//! Static data shown when the palette API cannot be reached.

use inspira_core::catalog::title_case;
use inspira_core::palette::Palette;

/// Tags shown when `/api/tags` fails.
pub const FALLBACK_TAGS: &[&str] = &[
    "autumn", "cold", "cyberpunk", "beach", "desert", "neon", "harvest", "frost", "vintage",
    "blossom", "storm",
];

/// Source label of demo palettes.
pub const DEMO_SOURCE: &str = "Demo Data";

const DEMO_COLORS: [[&str; 5]; 3] = [
    ["#FF6B6B", "#4ECDC4", "#556270", "#C7F464", "#FFA5A5"],
    ["#6A11CB", "#2575FC", "#8E2DE2", "#4A00E0", "#1A2980"],
    ["#FF9A8B", "#FF6B6B", "#FF8EAD", "#FB3569", "#FF3C3C"],
];

pub fn fallback_tags() -> Vec<String> {
    FALLBACK_TAGS.iter().map(|t| t.to_string()).collect()
}

/// Three demo palettes named after `tag`.
pub fn demo_palettes(tag: &str) -> Vec<Palette> {
    let label = title_case(tag);
    DEMO_COLORS
        .iter()
        .enumerate()
        .map(|(i, colors)| {
            Palette::new(
                format!("fallback-{}", i + 1),
                format!("{label} Palette {}", i + 1),
                colors,
            )
            .with_source(DEMO_SOURCE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_tags_are_the_first_eleven_popular_tags() {
        let popular = &inspira_core::catalog::POPULAR_TAGS[..FALLBACK_TAGS.len()];
        assert_eq!(FALLBACK_TAGS, popular);
        assert_eq!(fallback_tags().len(), 11);
    }

    #[test]
    fn demo_palettes_are_named_after_tag() {
        let palettes = demo_palettes("beach");
        assert_eq!(palettes.len(), 3);
        assert_eq!(palettes[0].id, "fallback-1");
        assert_eq!(palettes[2].name, "Beach Palette 3");
        assert!(palettes
            .iter()
            .all(|p| p.source.as_deref() == Some(DEMO_SOURCE) && p.colors.len() == 5));
    }
}
