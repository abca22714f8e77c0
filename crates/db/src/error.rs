/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) backend.
///
/// The collection store logs and swallows these; they only surface to
/// callers that use a backend directly.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem failure in a file-backed store.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing `key` would exceed the backend's byte quota.
    #[error("Storage quota exceeded writing '{key}' (limit {limit} bytes)")]
    QuotaExceeded { key: String, limit: usize },

    /// The key cannot be represented by the backend.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// A lock guarding the backend was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,
}
