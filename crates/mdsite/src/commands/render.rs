//! `mdsite render` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_storage::{FsStorage, Storage};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = FsStorage::new().read(&self.file)?;
        let html = mdsite_renderer::render(&markdown);
        Output::new().payload(&html)?;
        Ok(())
    }
}
