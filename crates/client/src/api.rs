//! REST client for the palette API.
//!
//! Wraps `GET /api/tags` and `GET /api/palettes` using [`reqwest`]. No
//! retries and no timeout beyond reqwest's defaults; callers fall back to
//! static data on any error.

use async_trait::async_trait;
use inspira_core::wire::PalettesByTag;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::config::{normalize_base_url, ClientConfig};

/// Errors from the palette API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Palette API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Source of browsable tags and palettes.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    /// Fetch the popular tag list.
    async fn tags(&self) -> Result<Vec<String>, ApiError>;

    /// Fetch up to `count` palettes for `tag`.
    async fn palettes(&self, tag: &str, count: u32) -> Result<PalettesByTag, ApiError>;
}

/// HTTP client for a palette API server.
#[derive(Debug, Clone)]
pub struct PaletteApi {
    client: reqwest::Client,
    base_url: String,
}

impl PaletteApi {
    /// Create a client for the server at `base_url`, e.g.
    /// `http://localhost:8001`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/tags`.
    pub async fn get_tags(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/palettes?tag=<tag>&count=<count>`.
    pub async fn get_palettes(&self, tag: &str, count: u32) -> Result<PalettesByTag, ApiError> {
        let response = self
            .client
            .get(self.url("/api/palettes"))
            .header(ACCEPT, "application/json")
            .query(&[("tag", tag.to_string()), ("count", count.to_string())])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Ensure the response has a success status code, otherwise return
    /// [`ApiError::Status`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Check the status then deserialize the JSON body.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PaletteSource for PaletteApi {
    async fn tags(&self) -> Result<Vec<String>, ApiError> {
        self.get_tags().await
    }

    async fn palettes(&self, tag: &str, count: u32) -> Result<PalettesByTag, ApiError> {
        self.get_palettes(tag, count).await
    }
}
