//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Holds an in-memory tree of directories and files. Entries are listed in
/// insertion order, which makes tests that depend on listing order
/// deterministic. Ancestor directories are registered implicitly.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use mdsite_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("docs/guide.md", "# User Guide")
///     .with_dir("docs/empty");
///
/// let entries = storage.list_entries(Path::new("docs")).unwrap();
/// let content = storage.read(Path::new("docs/guide.md")).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    /// Every registered node in insertion order.
    nodes: Vec<PathBuf>,
    dirs: HashSet<PathBuf>,
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its ancestors).
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.register_ancestors(&path);
        self.register_dir(path);
        self
    }

    /// Add a file with content (and its ancestor directories).
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.register_ancestors(&path);
        if !self.files.contains_key(&path) {
            self.nodes.push(path.clone());
        }
        self.files.insert(path, content.into());
        self
    }

    /// Add a directory whose listing fails with `PermissionDenied`.
    #[must_use]
    pub fn with_unreadable_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut storage = self.with_dir(path.clone());
        storage.unreadable.insert(path);
        storage
    }

    fn register_ancestors(&mut self, path: &Path) {
        let mut ancestors: Vec<PathBuf> = path
            .ancestors()
            .skip(1)
            .filter(|a| !a.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        ancestors.reverse();
        for ancestor in ancestors {
            self.register_dir(ancestor);
        }
    }

    fn register_dir(&mut self, path: PathBuf) {
        if self.dirs.insert(path.clone()) {
            self.nodes.push(path);
        }
    }
}

impl Storage for MockStorage {
    fn list_entries(&self, path: &Path) -> Result<Vec<Entry>, StorageError> {
        if self.unreadable.contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(path)
                .with_backend(BACKEND));
        }
        if self.files.contains_key(path) {
            return Err(StorageError::new(StorageErrorKind::NotADirectory)
                .with_path(path)
                .with_backend(BACKEND));
        }
        if !self.dirs.contains(path) {
            return Err(StorageError::not_found(path).with_backend(BACKEND));
        }

        let entries = self
            .nodes
            .iter()
            .filter(|node| node.parent() == Some(path))
            .filter_map(|node| {
                let name = node.file_name()?.to_string_lossy().into_owned();
                Some(Entry {
                    name,
                    is_dir: self.dirs.contains(node),
                })
            })
            .collect();
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
