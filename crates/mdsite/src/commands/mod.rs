//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod nav;
pub(crate) mod page;
pub(crate) mod render;

pub(crate) use build::BuildArgs;
pub(crate) use nav::NavArgs;
pub(crate) use page::PageArgs;
pub(crate) use render::RenderArgs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mdsite_config::{CliSettings, Config};
use mdsite_site::{NavOptions, Site, SiteOptions};
use mdsite_storage::FsStorage;

use crate::error::CliError;

/// Load configuration and open the site it describes.
fn open_site(
    config_path: Option<&Path>,
    source_dir: Option<PathBuf>,
    default_page: Option<String>,
) -> Result<Site, CliError> {
    let cli_settings = CliSettings {
        source_dir,
        default_page,
    };
    let config = Config::load(config_path, Some(&cli_settings))?;

    let root = &config.docs_resolved.source_dir;
    if !root.is_dir() {
        return Err(CliError::Validation(format!(
            "Source directory not found: {}",
            root.display()
        )));
    }
    tracing::debug!(source_dir = %root.display(), "Opening site");

    Ok(Site::new(Arc::new(FsStorage::new()), site_options(&config)))
}

/// Map loaded configuration onto site options.
fn site_options(config: &Config) -> SiteOptions {
    SiteOptions {
        root: config.docs_resolved.source_dir.clone(),
        default_page: config.docs_resolved.default_page.clone(),
        title: config.site.title.clone(),
        stylesheet: config.site.stylesheet.clone(),
        welcome_title: config.site.welcome_title.clone(),
        welcome_text: config.site.welcome_text.clone(),
        nav: NavOptions {
            max_depth: config.navigation.max_depth,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_site_options_from_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdsite.toml");
        fs::write(
            &config_path,
            r#"
[docs]
source_dir = "content"
default_page = "intro"

[site]
title = "Handbook"

[navigation]
max_depth = 2
"#,
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let options = site_options(&config);

        assert_eq!(options.root, temp_dir.path().join("content"));
        assert_eq!(options.default_page, "intro");
        assert_eq!(options.title, "Handbook");
        assert_eq!(options.nav.max_depth, Some(2));
    }

    #[test]
    fn test_open_site_missing_source_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdsite.toml");
        fs::write(&config_path, "").unwrap();

        let result = open_site(Some(&config_path), None, None);

        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_open_site_source_dir_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdsite.toml");
        fs::write(&config_path, "").unwrap();
        let docs = temp_dir.path().join("pages");
        fs::create_dir(&docs).unwrap();

        let site = open_site(Some(&config_path), Some(docs.clone()), Some("start".to_owned()))
            .unwrap();

        assert_eq!(site.options().root, docs);
        assert_eq!(site.options().default_page, "start");
    }
}
