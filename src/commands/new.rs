//! Create a new post

use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::content::naming::slugify;
use crate::content::PostMetadata;
use crate::i18n::Locale;
use crate::templates;
use crate::Site;

/// What the author supplies for a new post. Blank optional fields fall back
/// to the site defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cover_image: Option<String>,
    /// Alternate locale to write into; the default locale when absent
    pub locale: Option<Locale>,
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title {0:?} does not produce a usable slug")]
    EmptySlug(String),

    #[error("File {file_name} already exists")]
    AlreadyExists { file_name: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// File name for a post titled `title` created on `date`
pub fn file_name(site: &Site, title: &str, date: NaiveDate) -> Result<String, ScaffoldError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ScaffoldError::EmptySlug(title.to_string()));
    }

    let stem = site
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &date.format("%Y").to_string())
        .replace(":yy", &date.format("%y").to_string())
        .replace(":month", &date.format("%m").to_string())
        .replace(":day", &date.format("%d").to_string());

    Ok(format!("{}.{}", stem, site.config.post_extension))
}

/// Write a new post file dated `today` and return its path.
///
/// Never overwrites: an existing file with the same name is an error.
pub fn create_post(site: &Site, request: &NewPost, today: NaiveDate) -> Result<PathBuf, ScaffoldError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ScaffoldError::EmptyTitle);
    }

    let file_name = file_name(site, title, today)?;
    let locale = request.locale.unwrap_or(site.config.default_locale);
    let target_dir = site.locale_dir(locale);
    let file_path = target_dir.join(&file_name);

    if file_path.exists() {
        return Err(ScaffoldError::AlreadyExists { file_name, path: file_path });
    }

    let date = today.format("%Y-%m-%d").to_string();
    let metadata = PostMetadata {
        title: Some(title.to_string()),
        publish_date: Some(date.clone()),
        description: Some(or_default(&request.description, &site.config.default_description)),
        category: Some(or_default(&request.category, &site.config.default_category)),
        cover_image: Some(or_default(&request.cover_image, &site.config.default_cover_image)),
    };

    let scaffold = templates::load_scaffold(&site.base_dir, &site.config.post_extension)?;
    let content = format!(
        "{}\n{}",
        metadata.to_block(),
        templates::render_scaffold(&scaffold, title, &date)
    );

    fs::create_dir_all(&target_dir)?;

    // create_new guards against a file appearing after the check above
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&file_path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::AlreadyExists { file_name, path: file_path });
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(content.as_bytes())?;

    tracing::info!("Created {:?} [{}]", file_path, locale);
    Ok(file_path)
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Run the new command for today's local date
pub fn run(site: &Site, request: &NewPost) -> anyhow::Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    let path = create_post(site, request, today)?;
    println!("Created: {:?}", path);
    Ok(path)
}
