//! `mdsite page` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_site::LinkStyle;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Document slug, e.g. `Getting_Started/install` (default: configured default page).
    page: Option<String>,

    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl PageArgs {
    /// Execute the page command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the page cannot be rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let site = super::open_site(self.config.as_deref(), self.source_dir, None)?;
        let html = site.render_page(self.page.as_deref(), LinkStyle::Query)?;
        Output::new().payload(&html)?;
        Ok(())
    }
}
