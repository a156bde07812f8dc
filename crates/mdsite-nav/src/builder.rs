//! Recursive directory walk producing the navigation tree.
//!
//! The walk is a plain depth-first recursion over [`Storage::list_entries`]:
//! directories become categories, `.md` files become documents, and every
//! other entry is ignored. Listing order is preserved at every level.

use std::path::{Path, PathBuf};

use mdsite_storage::{Storage, StorageError};

use crate::node::NavNode;

/// Extension (without dot) that marks an entry as a document.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Options for [`build_navigation`].
#[derive(Clone, Debug, Default)]
pub struct NavOptions {
    /// Maximum category nesting below the root.
    ///
    /// `None` walks without limit, which never terminates on a store that
    /// contains a directory cycle (e.g. a symlink to an ancestor).
    pub max_depth: Option<usize>,
}

/// Navigation build error.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// A directory could not be listed. The whole build fails.
    #[error("Cannot list directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying storage error.
        #[source]
        source: StorageError,
    },
    /// A directory lies deeper than [`NavOptions::max_depth`].
    #[error("Directory {} exceeds maximum navigation depth of {max_depth}", .path.display())]
    TooDeep {
        /// First directory past the limit.
        path: PathBuf,
        /// Configured limit.
        max_depth: usize,
    },
}

/// Build the navigation tree for a document root.
///
/// Returns the root's children in listing order. Each document's slug is its
/// path relative to `root` with the `.md` suffix removed, joined with `/`,
/// so [`slug_to_path`] maps it back to the source file.
///
/// # Errors
///
/// Returns [`NavError::DirectoryUnreadable`] if the root or any subdirectory
/// cannot be listed, and [`NavError::TooDeep`] if the depth guard trips.
pub fn build_navigation<S: Storage + ?Sized>(
    storage: &S,
    root: &Path,
    options: &NavOptions,
) -> Result<Vec<NavNode>, NavError> {
    tracing::debug!(root = %root.display(), "Building navigation");
    walk(storage, root, "", 0, options)
}

/// Map a document slug back to its source file under `root`.
#[must_use]
pub fn slug_to_path(root: &Path, slug: &str) -> PathBuf {
    root.join(format!("{slug}.{MARKDOWN_EXTENSION}"))
}

fn walk<S: Storage + ?Sized>(
    storage: &S,
    dir_path: &Path,
    slug_prefix: &str,
    depth: usize,
    options: &NavOptions,
) -> Result<Vec<NavNode>, NavError> {
    let entries =
        storage
            .list_entries(dir_path)
            .map_err(|source| NavError::DirectoryUnreadable {
                path: dir_path.to_path_buf(),
                source,
            })?;

    let mut nodes = Vec::new();
    for entry in entries {
        if entry.is_dir {
            let child_path = dir_path.join(&entry.name);
            if let Some(max_depth) = options.max_depth
                && depth + 1 > max_depth
            {
                return Err(NavError::TooDeep {
                    path: child_path,
                    max_depth,
                });
            }
            let child_prefix = join_slug(slug_prefix, &entry.name);
            let children = walk(storage, &child_path, &child_prefix, depth + 1, options)?;
            nodes.push(NavNode::Category {
                name: entry.name,
                children,
            });
        } else if let Some(stem) = markdown_stem(&entry.name) {
            nodes.push(NavNode::Document {
                display_name: stem.to_owned(),
                slug: join_slug(slug_prefix, stem),
            });
        }
    }

    Ok(nodes)
}

/// Return the filename without extension if the extension is exactly `md`.
///
/// A bare `.md` has no stem and is not a document.
fn markdown_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    (ext == MARKDOWN_EXTENSION && !stem.is_empty()).then_some(stem)
}

fn join_slug(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}
