//! Storage abstraction for the mdsite documentation engine.
//!
//! This crate provides a [`Storage`] trait for the three read operations the
//! navigation builder and page resolver need from a document store:
//!
//! - [`Storage::list_entries`] enumerates a directory in store order
//! - [`Storage::read`] returns the UTF-8 content of a file
//! - [`Storage::exists`] checks whether a file is present
//!
//! # Architecture
//!
//! The crate provides:
//! - [`FsStorage`] implementation for the local filesystem
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mdsite_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new();
//! for entry in storage.list_entries(Path::new("docs"))? {
//!     println!("{} (dir: {})", entry.name, entry.is_dir);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Entry, Storage, StorageError, StorageErrorKind};
