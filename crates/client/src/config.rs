use std::path::PathBuf;

use inspira_db::{CollectionStore, FileStore, StorageError};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Palette API base URL without a trailing slash.
    pub api_url: String,
    /// Directory holding the persisted collection.
    pub data_dir: PathBuf,
    /// Palettes requested per tag.
    pub palette_count: u32,
}

/// Palettes requested per tag by the browse page.
pub const DEFAULT_PALETTE_COUNT: u32 = 6;

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `INSPIRA_API_URL`  | `http://localhost:8001` |
    /// | `INSPIRA_DATA_DIR` | `.inspira`              |
    pub fn from_env() -> Self {
        let api_url = std::env::var("INSPIRA_API_URL")
            .unwrap_or_else(|_| "http://localhost:8001".into());

        let data_dir = std::env::var("INSPIRA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".inspira"));

        Self::new(api_url, data_dir)
    }

    pub fn new(api_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: normalize_base_url(&api_url.into()),
            data_dir: data_dir.into(),
            palette_count: DEFAULT_PALETTE_COUNT,
        }
    }

    /// Open the file-backed collection store under `data_dir`.
    pub fn open_store(&self) -> Result<CollectionStore<FileStore>, StorageError> {
        Ok(CollectionStore::new(FileStore::open(&self.data_dir)?))
    }
}

/// Trim whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
