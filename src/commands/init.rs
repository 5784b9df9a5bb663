//! Initialize a new blog site

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use super::new::{create_post, NewPost};
use crate::Site;

const DEFAULT_CONFIG: &str = r#"# Blog configuration

# Site
title: Blog

# Content
content_dir: content/blogs
default_locale: en

# Writing
post_extension: mdx
new_post_name: ":yy:month:day-:title"
default_description: A new blog post
default_category: General

# Seconds a cached listing stays fresh
revalidate_secs: 1800
"#;

/// Initialize a new site in the given directory with a sample post dated `today`
pub fn init_site(target_dir: &Path, today: NaiveDate) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let site = Site::new(target_dir)?;
    fs::create_dir_all(&site.content_dir)?;

    let sample = NewPost {
        title: "Hello World".to_string(),
        description: Some("Welcome to the blog".to_string()),
        ..Default::default()
    };
    match create_post(&site, &sample, today) {
        Ok(path) => tracing::debug!("Created sample post {:?}", path),
        Err(e) => tracing::info!("Skipping sample post: {}", e),
    }

    Ok(())
}
