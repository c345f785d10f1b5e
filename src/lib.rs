//! folio: Markdown content store for a personal blog
//!
//! Posts live in a single directory as Markdown files with YAML front-matter.
//! [`content::ContentStore`] lists and fetches them, hiding unpublished posts
//! when running in production mode.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::{Path, PathBuf};

use config::{Mode, SiteConfig};
use content::ContentStore;

/// The main Folio application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the posts
    pub content_dir: PathBuf,
    /// Environment mode handed to the content store
    pub mode: Mode,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let mode = config.mode;

        Ok(Self {
            config,
            base_dir,
            content_dir,
            mode,
        })
    }

    /// Override the configured mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Content store over the content directory
    pub fn store(&self) -> ContentStore {
        ContentStore::new(&self.content_dir, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("posts"));
        assert_eq!(folio.mode, Mode::Development);
    }

    #[test]
    fn test_config_and_mode_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: blog\nmode: production\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("blog"));
        assert_eq!(folio.store().mode(), Mode::Production);

        let folio = folio.with_mode(Mode::Development);
        assert_eq!(folio.store().mode(), Mode::Development);
        assert_eq!(folio.store().dir(), dir.path().join("blog"));
    }
}
