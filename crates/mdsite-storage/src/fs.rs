//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading documents from the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{Entry, Storage, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Lists directories in the order the operating system returns them and
/// follows symbolic links when classifying entries, so a linked directory is
/// reported as a directory.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use mdsite_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new();
/// let content = storage.read(Path::new("docs/guide.md"))?;
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

impl FsStorage {
    /// Create a new filesystem storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FsStorage {
    fn list_entries(&self, path: &Path) -> Result<Vec<Entry>, StorageError> {
        let read_dir = fs::read_dir(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry
                .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))?;

            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(path = %entry.path().display(), "Skipping entry with non UTF-8 name");
                continue;
            };

            // fs::metadata follows symlinks
            let Ok(metadata) = fs::metadata(entry.path()) else {
                tracing::warn!(path = %entry.path().display(), "Skipping unresolvable entry");
                continue;
            };
            entries.push(Entry {
                name,
                is_dir: metadata.is_dir(),
            });
        }

        tracing::debug!(path = %path.display(), count = entries.len(), "Listed directory");
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, StorageError> {
        fs::canonicalize(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }
}
