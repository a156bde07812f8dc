//! Site facade: navigation, page rendering and page assembly.
//!
//! Nothing is cached: every call rebuilds the navigation tree and re-reads
//! the requested document.

use std::path::PathBuf;
use std::sync::Arc;

use mdsite_nav::{NavError, NavNode, NavOptions, build_navigation};
use mdsite_storage::{Storage, StorageError};

use crate::resolve::{ResolveError, resolve_page};
use crate::template::{LinkStyle, render_shell, render_sidebar, welcome_fragment};

/// Site error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Navigation could not be built.
    #[error(transparent)]
    Navigation(#[from] NavError),
    /// An existing document could not be read.
    #[error("Failed to read page: {0}")]
    Storage(#[from] StorageError),
}

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Document root.
    pub root: PathBuf,
    /// Slug rendered when no page is requested.
    pub default_page: String,
    /// Site title for `<title>` and the sidebar brand.
    pub title: String,
    /// Stylesheet href.
    pub stylesheet: String,
    /// Heading of the welcome fallback.
    pub welcome_title: String,
    /// Text of the welcome fallback.
    pub welcome_text: String,
    /// Navigation build options.
    pub nav: NavOptions,
}

impl SiteOptions {
    /// Options with defaults for everything but the document root.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            default_page: "home".to_owned(),
            title: "Docs".to_owned(),
            stylesheet: "/docs/style.css".to_owned(),
            welcome_title: "Welcome".to_owned(),
            welcome_text: "Select a topic from the sidebar.".to_owned(),
            nav: NavOptions::default(),
        }
    }
}

/// Result of rendering a page fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRenderResult {
    /// Slug that was requested (the default page when none was given).
    pub slug: String,
    /// Rendered HTML fragment.
    pub html: String,
    /// False when the welcome fallback was rendered instead of a document.
    pub found: bool,
}

/// Documentation site over a storage backend.
pub struct Site {
    storage: Arc<dyn Storage>,
    options: SiteOptions,
}

impl Site {
    /// Create a new site.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, options: SiteOptions) -> Self {
        Self { storage, options }
    }

    /// Site options.
    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Build the navigation tree for the document root.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Navigation` if any directory cannot be listed.
    pub fn navigation(&self) -> Result<Vec<NavNode>, SiteError> {
        Ok(build_navigation(
            self.storage.as_ref(),
            &self.options.root,
            &self.options.nav,
        )?)
    }

    /// Render the fragment for a requested page.
    ///
    /// `None` requests the default page. Missing pages and slugs rejected by
    /// [`resolve_page`] render the welcome fallback with `found == false`.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Storage` if an existing document cannot be read
    /// (for example because it is not valid UTF-8).
    pub fn render_fragment(&self, page: Option<&str>) -> Result<PageRenderResult, SiteError> {
        let slug = page.unwrap_or(&self.options.default_page);

        let path = match resolve_page(self.storage.as_ref(), &self.options.root, slug) {
            Ok(path) => path,
            Err(ResolveError::NotFound(path)) => {
                tracing::debug!(slug, path = %path.display(), "Page not found, rendering welcome page");
                return Ok(self.welcome(slug));
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "Rejected page request");
                return Ok(self.welcome(slug));
            }
        };

        let markdown = self.storage.read(&path)?;
        let html = mdsite_renderer::render(&markdown);
        tracing::debug!(slug, bytes = markdown.len(), "Rendered page");

        Ok(PageRenderResult {
            slug: slug.to_owned(),
            html,
            found: true,
        })
    }

    /// Render a complete HTML page: sidebar plus fragment in the page shell.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Navigation` if the navigation cannot be built and
    /// `SiteError::Storage` if the document cannot be read.
    pub fn render_page(
        &self,
        page: Option<&str>,
        links: LinkStyle<'_>,
    ) -> Result<String, SiteError> {
        let nav = self.navigation()?;
        let fragment = self.render_fragment(page)?;
        Ok(self.assemble(&nav, &fragment, links))
    }

    /// Wrap an already rendered fragment with the sidebar for `nav`.
    #[must_use]
    pub fn assemble(
        &self,
        nav: &[NavNode],
        fragment: &PageRenderResult,
        links: LinkStyle<'_>,
    ) -> String {
        let sidebar = render_sidebar(nav, &self.options.title, &fragment.slug, links);
        render_shell(
            &self.options.title,
            &self.options.stylesheet,
            &sidebar,
            &fragment.html,
        )
    }

    fn welcome(&self, slug: &str) -> PageRenderResult {
        PageRenderResult {
            slug: slug.to_owned(),
            html: welcome_fragment(&self.options.welcome_title, &self.options.welcome_text),
            found: false,
        }
    }
}
