//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::i18n::Locale;

/// Stock cover image used when a new post does not name one
pub const DEFAULT_COVER_IMAGE: &str = "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Content
    pub content_dir: String,
    pub default_locale: Locale,

    // Writing
    pub post_extension: String,
    pub new_post_name: String,
    pub default_description: String,
    pub default_category: String,
    pub default_cover_image: String,

    // Caching (for callers that wrap the reader)
    pub revalidate_secs: u64,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),

            content_dir: "content/blogs".to_string(),
            default_locale: Locale::En,

            post_extension: "mdx".to_string(),
            new_post_name: ":yy:month:day-:title".to_string(),
            default_description: "A new blog post".to_string(),
            default_category: "General".to_string(),
            default_cover_image: DEFAULT_COVER_IMAGE.to_string(),

            revalidate_secs: 1800,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }

    /// How long a cached listing stays fresh
    pub fn revalidate_interval(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/blogs");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.post_extension, "mdx");
        assert_eq!(config.revalidate_interval(), Duration::from_secs(1800));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
default_locale: vi
default_category: Notes
revalidate_secs: 60
analytics_token: abc
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.default_locale, Locale::Vi);
        assert_eq!(config.default_category, "Notes");
        assert_eq!(config.revalidate_secs, 60);
        // Unset fields keep their defaults
        assert_eq!(config.default_description, "A new blog post");
        assert!(config.extra.contains_key("analytics_token"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let result: Result<SiteConfig, _> = serde_yaml::from_str("default_locale: fr\n");
        assert!(result.is_err());
    }
}
