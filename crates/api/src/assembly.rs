//! Palette list assembly for the browse endpoints.
//!
//! A tag's list is built from up to two curated palettes, then upstream
//! trending palettes, then generated palettes until the requested count is
//! reached.

use inspira_core::catalog::{all_curated, curated_for, fallback_palette, generate_palettes};
use inspira_core::palette::Palette;
use inspira_core::wire::{PalettesByTag, TrendingPalettes};
use rand::seq::SliceRandom;

use crate::trending::TrendingSource;

/// Default palettes per tag.
pub const DEFAULT_TAG_COUNT: usize = 5;

/// Default trending palettes.
pub const DEFAULT_TRENDING_COUNT: usize = 10;

/// Upper bound on any requested count.
pub const MAX_COUNT: usize = 20;

/// Curated palettes placed ahead of trending ones.
const MAX_CURATED: usize = 2;

/// Message carried by fallback responses.
pub const FALLBACK_ERROR: &str = "Using fallback data";

/// Clamp a requested count to `1..=MAX_COUNT`, using `default` when absent.
pub fn clamp_count(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(n) => n.clamp(1, MAX_COUNT as i64) as usize,
        None => default,
    }
}

/// Build the palette list for a known `tag`.
pub async fn palettes_for_tag(
    tag: &str,
    count: usize,
    trending: &dyn TrendingSource,
) -> PalettesByTag {
    let mut palettes: Vec<Palette> = curated_for(tag)
        .into_iter()
        .take(MAX_CURATED.min(count))
        .collect();

    if palettes.len() < count {
        match trending.trending(count - palettes.len()).await {
            Ok(upstream) => palettes.extend(upstream),
            Err(e) => {
                tracing::warn!(tag, error = %e, "Trending source failed, serving fallback palettes");
                return fallback_for_tag(tag, count);
            }
        }
    }

    if palettes.len() < count {
        palettes.extend(generate_palettes(tag, count - palettes.len()));
    }

    palettes.truncate(count);
    for (i, palette) in palettes.iter_mut().enumerate() {
        palette.id = format!("{tag}-{i}");
    }

    PalettesByTag {
        tag: tag.to_string(),
        total: palettes.len(),
        palettes,
        error: None,
    }
}

/// Curated palettes for `tag`, or its single fallback palette, flagged with
/// [`FALLBACK_ERROR`].
pub fn fallback_for_tag(tag: &str, count: usize) -> PalettesByTag {
    let mut palettes = curated_for(tag);
    if palettes.is_empty() {
        palettes.push(fallback_palette(tag));
    }
    palettes.truncate(count);

    PalettesByTag {
        tag: tag.to_string(),
        total: palettes.len(),
        palettes,
        error: Some(FALLBACK_ERROR.into()),
    }
}

/// Upstream trending palettes, or a shuffled sample of the curated catalog
/// when the upstream is empty or failing.
pub async fn trending_or_curated(count: usize, trending: &dyn TrendingSource) -> TrendingPalettes {
    let palettes = match trending.trending(count).await {
        Ok(upstream) if !upstream.is_empty() => upstream,
        Ok(_) => shuffled_curated(count),
        Err(e) => {
            tracing::warn!(error = %e, "Trending source failed, sampling curated palettes");
            shuffled_curated(count)
        }
    };

    TrendingPalettes {
        total: palettes.len(),
        palettes,
    }
}

fn shuffled_curated(count: usize) -> Vec<Palette> {
    let mut palettes = all_curated();
    palettes.shuffle(&mut rand::rng());
    palettes.truncate(count);
    palettes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trending::FixedTrending;
    use inspira_core::catalog::{SOURCE_CURATED, SOURCE_GENERATED};

    fn upstream(n: usize) -> FixedTrending {
        FixedTrending::new(
            (0..n)
                .map(|i| Palette::new(format!("trending-{i}"), "Up", &["#010101"; 5]))
                .collect(),
        )
    }

    fn sources(body: &PalettesByTag) -> Vec<&str> {
        body.palettes
            .iter()
            .map(|p| p.source.as_deref().unwrap_or(""))
            .collect()
    }

    // -- clamp_count --

    #[test]
    fn count_defaults_and_clamps() {
        assert_eq!(clamp_count(None, DEFAULT_TAG_COUNT), 5);
        assert_eq!(clamp_count(Some(0), DEFAULT_TAG_COUNT), 1);
        assert_eq!(clamp_count(Some(-3), DEFAULT_TAG_COUNT), 1);
        assert_eq!(clamp_count(Some(99), DEFAULT_TAG_COUNT), MAX_COUNT);
        assert_eq!(clamp_count(Some(7), DEFAULT_TAG_COUNT), 7);
    }

    // -- palettes_for_tag --

    #[tokio::test]
    async fn curated_then_trending_then_generated() {
        let body = palettes_for_tag("autumn", 5, &upstream(1)).await;
        assert_eq!(body.total, 5);
        assert_eq!(body.palettes.len(), 5);
        let ids: Vec<_> = body.palettes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["autumn-0", "autumn-1", "autumn-2", "autumn-3", "autumn-4"]);
        assert_eq!(
            sources(&body),
            [SOURCE_CURATED, SOURCE_CURATED, "", SOURCE_GENERATED, SOURCE_GENERATED]
        );
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn small_count_uses_curated_only() {
        let body = palettes_for_tag("beach", 1, &FixedTrending::failing("never called")).await;
        assert_eq!(body.total, 1);
        assert_eq!(body.palettes[0].name, "Ocean Breeze");
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn tag_without_curated_generates() {
        let body = palettes_for_tag("ocean", 3, &FixedTrending::empty()).await;
        assert_eq!(body.total, 3);
        assert_eq!(sources(&body), [SOURCE_GENERATED; 3]);
        assert_eq!(body.palettes[2].name, "Ocean Palette 3");
    }

    #[tokio::test]
    async fn trending_failure_serves_curated_with_error() {
        let body = palettes_for_tag("cyberpunk", 5, &FixedTrending::failing("down")).await;
        assert_eq!(body.error.as_deref(), Some(FALLBACK_ERROR));
        assert_eq!(body.total, 2);
        assert_eq!(body.palettes[0].name, "Neon Nights");
    }

    #[tokio::test]
    async fn trending_failure_without_curated_serves_single_fallback() {
        let body = palettes_for_tag("storm", 5, &FixedTrending::failing("down")).await;
        assert_eq!(body.total, 1);
        assert_eq!(body.palettes[0].id, "storm-fallback");
        assert_eq!(body.palettes[0].name, "Storm Palette");
    }

    // -- trending_or_curated --

    #[tokio::test]
    async fn trending_passes_upstream_through() {
        let body = trending_or_curated(3, &upstream(3)).await;
        assert_eq!(body.total, 3);
        assert_eq!(body.palettes[0].id, "trending-0");
    }

    #[tokio::test]
    async fn trending_falls_back_to_curated_sample() {
        for source in [FixedTrending::empty(), FixedTrending::failing("down")] {
            let body = trending_or_curated(4, &source).await;
            assert_eq!(body.total, 4);
            assert!(body
                .palettes
                .iter()
                .all(|p| p.source.as_deref() == Some(SOURCE_CURATED)));
        }
    }

    #[tokio::test]
    async fn curated_sample_is_capped_by_catalog_size() {
        let body = trending_or_curated(MAX_COUNT, &FixedTrending::empty()).await;
        assert_eq!(body.total, all_curated().len());
    }
}
