//! Navigation tree builder for mdsite.
//!
//! Walks a document root through the [`Storage`](mdsite_storage::Storage)
//! interface and produces a tree of [`NavNode`]s: a [`NavNode::Category`] for
//! every directory and a [`NavNode::Document`] for every markdown file.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use mdsite_nav::{NavOptions, build_navigation};
//! use mdsite_storage::FsStorage;
//!
//! let nav = build_navigation(&FsStorage::new(), Path::new("docs"), &NavOptions::default())?;
//! for node in &nav {
//!     println!("{node:?}");
//! }
//! ```

mod builder;
mod node;

pub use builder::{MARKDOWN_EXTENSION, NavError, NavOptions, build_navigation, slug_to_path};
pub use node::NavNode;
