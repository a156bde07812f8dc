//! Static site builder.
//!
//! Writes one HTML file per document, mirroring the slug layout, plus an
//! `index.html` for the default page. Sidebar links are relative so the
//! output can be served from any prefix or opened from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::site::{Site, SiteError};
use crate::template::LinkStyle;

/// Slug whose output file holds the default page.
const INDEX_SLUG: &str = "index";

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Navigation or a document could not be loaded.
    #[error(transparent)]
    Site(#[from] SiteError),
    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a finished build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files written, in write order (`index.html` last, exactly once).
    pub written: Vec<PathBuf>,
}

/// Builds a static documentation site from a [`Site`].
pub struct StaticSiteBuilder<'a> {
    site: &'a Site,
}

impl<'a> StaticSiteBuilder<'a> {
    /// Create a builder for `site`.
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Render every document into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Site`] if the navigation or a document cannot be
    /// loaded and [`BuildError::Io`] if an output file cannot be written.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        let nav = self.site.navigation()?;
        let mut slugs = Vec::new();
        for node in &nav {
            node.collect_slugs(&mut slugs);
        }

        let mut report = BuildReport::default();
        for &slug in &slugs {
            if slug == INDEX_SLUG {
                tracing::warn!("Document 'index' is replaced by the default page");
                continue;
            }
            let fragment = self.site.render_fragment(Some(slug))?;
            let html = self
                .site
                .assemble(&nav, &fragment, LinkStyle::Static { base: slug });
            let path = output_dir.join(format!("{slug}.html"));
            write_file(&path, &html)?;
            report.written.push(path);
        }

        let fragment = self.site.render_fragment(None)?;
        let html = self
            .site
            .assemble(&nav, &fragment, LinkStyle::Static { base: "" });
        let index = output_dir.join(format!("{INDEX_SLUG}.html"));
        write_file(&index, &html)?;
        report.written.push(index);

        tracing::debug!(pages = report.written.len(), "Static build finished");
        Ok(report)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    let io_error = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, content).map_err(io_error)
}
