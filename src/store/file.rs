use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use super::KvStore;

/// Error type for opening a [`FileStore`]. Reads and writes after open
/// never fail observably (see the [`KvStore`] contract).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create store directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
}

/// On-disk adapter: one file per key under a directory, written atomically.
///
/// A failed write is logged and dropped rather than surfaced; the in-memory
/// state stays authoritative for the session, as with browser local
/// storage.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn try_set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.key_path(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.try_set(key, value) {
            warn!(key, %err, "dropping store write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("bestask_active_space", "demo-space");
        assert_eq!(
            store.get("bestask_active_space").as_deref(),
            Some("demo-space")
        );

        // Overwrite replaces the whole value.
        store.set("bestask_active_space", "other");
        assert_eq!(store.get("bestask_active_space").as_deref(), Some("other"));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("bestask_tasks").is_none());
    }

    #[test]
    fn reopening_sees_previous_writes() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("bestask_spaces", "[]");
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("bestask_spaces").as_deref(), Some("[]"));
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        let store = FileStore::open(&nested).unwrap();
        assert_eq!(store.dir(), nested.as_path());
        assert!(nested.is_dir());
    }
}
