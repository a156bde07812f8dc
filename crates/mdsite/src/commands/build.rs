//! `mdsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_site::StaticSiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site.
    #[arg(short, long)]
    out: PathBuf,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Page written to index.html (overrides config).
    #[arg(long)]
    default_page: Option<String>,

    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the site cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = super::open_site(self.config.as_deref(), self.source_dir, self.default_page)?;

        output.info(&format!("Source: {}", site.options().root.display()));
        output.info(&format!("Output: {}", self.out.display()));

        let report = StaticSiteBuilder::new(&site).build(&self.out)?;

        output.success(&format!(
            "Built {} pages to {}",
            report.written.len(),
            self.out.display()
        ));
        Ok(())
    }
}
