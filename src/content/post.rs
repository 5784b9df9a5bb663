//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::PostMetadata;
use crate::i18n::Locale;

/// A validated blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, unique within a locale
    pub slug: String,

    /// Language this entry is written in
    pub locale: Locale,

    /// Post title
    pub title: String,

    /// Short summary
    pub description: Option<String>,

    /// Publication date
    pub publish_date: NaiveDate,

    /// Category label
    pub category: Option<String>,

    /// Cover image URI
    pub cover_image: Option<String>,

    /// Raw markup body
    pub body: String,

    /// Source file path relative to the content directory
    pub source: PathBuf,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: &str, locale: Locale, title: &str, publish_date: NaiveDate) -> Self {
        Self {
            slug: slug.to_string(),
            locale,
            title: title.to_string(),
            description: None,
            publish_date,
            category: None,
            cover_image: None,
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    /// Metadata block equivalent to this post
    pub fn metadata(&self) -> PostMetadata {
        PostMetadata {
            title: Some(self.title.clone()),
            publish_date: Some(self.publish_date.format("%Y-%m-%d").to_string()),
            description: self.description.clone(),
            category: self.category.clone(),
            cover_image: self.cover_image.clone(),
        }
    }
}
