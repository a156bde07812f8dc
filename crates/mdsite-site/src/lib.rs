//! Page resolution and page assembly for mdsite.
//!
//! This crate composes the navigation builder and the markdown renderer
//! into complete pages:
//! - [`Site`]: resolves a requested page, renders it (or the welcome
//!   fallback) and wraps it with the sidebar in an HTML shell
//! - [`resolve_page`]: maps a slug to a file inside the document root
//! - [`StaticSiteBuilder`]: writes every page of a [`Site`] to disk
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use mdsite_site::{LinkStyle, Site, SiteOptions};
//! use mdsite_storage::FsStorage;
//!
//! let options = SiteOptions::new(PathBuf::from("docs"));
//! let site = Site::new(Arc::new(FsStorage::new()), options);
//!
//! let nav = site.navigation()?;
//! let html = site.render_page(Some("Getting_Started/install"), LinkStyle::Query)?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod resolve;
mod site;
mod template;
mod util;

pub use builder::{BuildError, BuildReport, StaticSiteBuilder};
pub use resolve::{ResolveError, resolve_page};
pub use site::{PageRenderResult, Site, SiteError, SiteOptions};
pub use template::{LinkStyle, category_label, render_shell, render_sidebar, welcome_fragment};
pub use util::relative_path;

// Re-export the navigation types for presentation layers
pub use mdsite_nav::{NavNode, NavOptions};
