//! Durable palette collection storage.
//!
//! - [`KeyValueStore`]: the injected get/set/remove storage seam, with an
//!   in-memory ([`MemoryStore`]) and a file-backed ([`FileStore`]) backend.
//! - [`CollectionStore`]: the created/favorites lists and the legacy
//!   create-page list, persisted as JSON arrays under fixed keys.
//! - [`ProfileSettings`]: profile name, email and picture with defaults.

pub mod collection;
pub mod error;
pub mod file;
pub mod keys;
pub mod kv;
pub mod settings;

pub use collection::CollectionStore;
pub use error::StorageError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use settings::{Profile, ProfileSettings};
