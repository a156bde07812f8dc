//! `mdsite nav` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a directory cannot be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let site = super::open_site(self.config.as_deref(), self.source_dir, None)?;
        let nav = site.navigation()?;
        let json = serde_json::to_string_pretty(&nav)?;
        Output::new().payload(&json)?;
        Ok(())
    }
}
