//! Upstream trending palettes.
//!
//! [`CoolorsTrending`] fetches the public Coolors trending feed;
//! [`FixedTrending`] serves a fixed list (or a fixed failure) and stands in
//! when the upstream is disabled.

use std::time::Duration;

use async_trait::async_trait;
use inspira_core::palette::{Palette, PALETTE_SIZE};
use serde::Deserialize;

use crate::config::ServerConfig;

/// Source label of upstream palettes.
pub const SOURCE_TRENDING: &str = "Coolors Trending";

/// Errors from a trending source.
#[derive(Debug, thiserror::Error)]
pub enum TrendingError {
    /// Transport, timeout or body decoding failure.
    #[error("Trending request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("Trending upstream returned status {0}")]
    Status(u16),

    #[error("Trending source unavailable: {0}")]
    Unavailable(String),
}

/// A source of trending palettes.
#[async_trait]
pub trait TrendingSource: Send + Sync {
    /// Up to `count` trending palettes.
    async fn trending(&self, count: usize) -> Result<Vec<Palette>, TrendingError>;
}

// ---------------------------------------------------------------------------
// Coolors
// ---------------------------------------------------------------------------

/// Coolors trending feed client.
pub struct CoolorsTrending {
    client: reqwest::Client,
    url: String,
}

impl CoolorsTrending {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TrendingError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, TrendingError> {
        Self::new(
            &config.trending_url,
            Duration::from_secs(config.trending_timeout_secs),
        )
    }
}

#[async_trait]
impl TrendingSource for CoolorsTrending {
    async fn trending(&self, count: usize) -> Result<Vec<Palette>, TrendingError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendingError::Status(status.as_u16()));
        }

        let feed: TrendingFeed = response.json().await?;
        let palettes = feed.into_palettes(count);
        tracing::debug!(count = palettes.len(), "Fetched trending palettes");
        Ok(palettes)
    }
}

#[derive(Debug, Default, Deserialize)]
struct TrendingFeed {
    #[serde(default)]
    palettes: Vec<FeedPalette>,
}

#[derive(Debug, Deserialize)]
struct FeedPalette {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    colors: Vec<FeedColor>,
}

#[derive(Debug, Deserialize)]
struct FeedColor {
    hex: String,
}

impl TrendingFeed {
    /// Convert the first `count` feed entries, dropping entries with fewer
    /// than five colors.
    fn into_palettes(self, count: usize) -> Vec<Palette> {
        self.palettes
            .into_iter()
            .take(count)
            .enumerate()
            .filter(|(_, p)| p.colors.len() >= PALETTE_SIZE)
            .map(|(i, p)| Palette {
                id: format!("trending-{i}"),
                name: p
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| format!("Trending Palette {}", i + 1)),
                colors: p
                    .colors
                    .iter()
                    .take(PALETTE_SIZE)
                    .map(|c| format!("#{}", c.hex.trim_start_matches('#')))
                    .collect(),
                source: Some(SOURCE_TRENDING.into()),
                tags: None,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Fixed
// ---------------------------------------------------------------------------

/// Serves a fixed palette list, or fails every request.
pub struct FixedTrending {
    result: Result<Vec<Palette>, String>,
}

impl FixedTrending {
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self {
            result: Ok(palettes),
        }
    }

    /// No upstream palettes; callers fill in from the catalog.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
        }
    }
}

#[async_trait]
impl TrendingSource for FixedTrending {
    async fn trending(&self, count: usize) -> Result<Vec<Palette>, TrendingError> {
        match &self.result {
            Ok(palettes) => Ok(palettes.iter().take(count).cloned().collect()),
            Err(reason) => Err(TrendingError::Unavailable(reason.clone())),
        }
    }
}
