//! Directory-backed key/value store.
//!
//! Each key maps to `<key>.json` inside a single directory opened through
//! `cap-std`, so the store cannot reach outside the directory it was given.

use std::io::ErrorKind;
use std::sync::Arc;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

const FILE_EXTENSION: &str = "json";

/// Key/value store writing one file per key.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a half-written snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: Arc<Dir>,
}

impl FileStore {
    /// Wraps an already opened directory.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    /// Opens an existing directory using ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        Dir::open_ambient_dir(path.as_ref(), ambient_authority())
            .map(Self::new)
            .map_err(StorageError::io)
    }

    fn file_name(key: &str) -> StorageResult<String> {
        let is_valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\'])
            && !key.chars().any(char::is_control);
        if !is_valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(format!("{key}.{FILE_EXTENSION}"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = Self::file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = Self::file_name(key)?;
        let staging_name = format!(".{file_name}.tmp");
        self.dir
            .write(&staging_name, value)
            .map_err(StorageError::io)?;
        self.dir
            .rename(&staging_name, &self.dir, &file_name)
            .map_err(StorageError::io)
    }
}
