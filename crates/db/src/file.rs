//! File-backed key-value storage.
//!
//! Each key is stored as `<data_dir>/<encoded key>.json`. Writes go to a
//! temporary sibling file which is synced and then renamed over the target,
//! so readers never observe a partially written value.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Directory-per-installation storage backend.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        Ok(self.dir.join(format!("{}.json", encode_key(key)?)))
    }
}

/// Map a storage key onto a safe file stem.
///
/// ASCII alphanumerics, `-` and `_` pass through; `:` becomes `.`;
/// anything else is rejected so two keys can never share a file.
fn encode_key(key: &str) -> Result<String, StorageError> {
    if key.is_empty() || key.starts_with('.') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    key.chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Ok(c),
            ':' => Ok('.'),
            _ => Err(StorageError::InvalidKey(key.to_string())),
        })
        .collect()
}

fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        let written = write_synced(&tmp, value).and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            // The temp file is never left behind.
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
