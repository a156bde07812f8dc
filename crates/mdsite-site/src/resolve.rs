//! Requested page to source file resolution.
//!
//! A slug comes from an untrusted request. It is checked lexically first
//! (no parent, root or drive components) and then, once the file is known to
//! exist, by comparing canonical paths so a symlink cannot lead outside the
//! document root.

use std::path::{Component, Path, PathBuf};

use mdsite_nav::slug_to_path;
use mdsite_storage::{Storage, StorageError};

/// Page resolution error.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Slug is empty or contains components that could escape the root.
    #[error("Invalid page slug: {0:?}")]
    InvalidSlug(String),
    /// No document exists for the slug.
    #[error("Page not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The document resolves to a location outside the document root.
    #[error("Page resolves outside the document root: {}", .0.display())]
    OutsideRoot(PathBuf),
    /// Canonical paths could not be computed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Resolve a requested slug to the markdown file it names.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidSlug`] for slugs that could escape the
/// root, [`ResolveError::NotFound`] when the file does not exist and
/// [`ResolveError::OutsideRoot`] when it exists but resolves elsewhere.
pub fn resolve_page<S: Storage + ?Sized>(
    storage: &S,
    root: &Path,
    slug: &str,
) -> Result<PathBuf, ResolveError> {
    validate_slug(slug)?;

    let path = slug_to_path(root, slug);
    if !storage.exists(&path) {
        return Err(ResolveError::NotFound(path));
    }

    let canonical_root = storage.canonicalize(root)?;
    let canonical_path = storage.canonicalize(&path)?;
    if !canonical_path.starts_with(&canonical_root) {
        return Err(ResolveError::OutsideRoot(canonical_path));
    }

    Ok(path)
}

/// Reject slugs with parent, root or prefix components.
fn validate_slug(slug: &str) -> Result<(), ResolveError> {
    let invalid = || ResolveError::InvalidSlug(slug.to_owned());

    if slug.trim().is_empty() || slug.contains(['\\', '\0']) || slug.starts_with('/') {
        return Err(invalid());
    }

    let escapes = Path::new(slug).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(invalid());
    }

    Ok(())
}
