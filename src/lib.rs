//! mdx-blog: locale-aware blog content reader
//!
//! Posts live as MDX/markdown files under a content directory, one
//! subdirectory per alternate locale. This crate discovers and validates them,
//! serves ordered listings with default-locale fallback, and scaffolds new
//! post files.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod i18n;
pub mod repository;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{ContentError, Post, PostMetadata};
pub use i18n::Locale;
pub use repository::{FsRepository, MemoryRepository, PostRepository};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an explicit configuration
    pub fn with_config<P: Into<PathBuf>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.into();
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Filesystem reader for this site's content
    pub fn repository(&self) -> FsRepository {
        FsRepository::new(&self.content_dir, self.config.default_locale)
    }

    /// Reader that reuses listings for the configured revalidation window
    pub fn cached_repository(&self) -> cache::RevalidatingRepository<FsRepository> {
        cache::RevalidatingRepository::new(self.repository(), self.config.revalidate_interval())
    }

    /// Directory holding posts for `locale`
    pub fn locale_dir(&self, locale: Locale) -> PathBuf {
        if locale == self.config.default_locale {
            self.content_dir.clone()
        } else {
            self.content_dir.join(locale.code())
        }
    }
}
