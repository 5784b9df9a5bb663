//! Content loader - discovers and parses posts from the content directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::naming::{is_post_file, slug_from_stem};
use super::{ContentError, Post, PostMetadata};
use crate::i18n::Locale;

/// Loads posts from a content directory.
///
/// Files directly in the directory belong to the default locale; files in a
/// subdirectory named after a locale code belong to that locale.
pub struct ContentLoader {
    content_dir: PathBuf,
    default_locale: Locale,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new<P: Into<PathBuf>>(content_dir: P, default_locale: Locale) -> Self {
        Self {
            content_dir: content_dir.into(),
            default_locale,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Load every valid post in every locale.
    ///
    /// Invalid entries are logged and skipped. Only an unreadable content
    /// directory is an error.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        fs::read_dir(&self.content_dir).map_err(|source| ContentError::Unreadable {
            path: self.content_dir.clone(),
            source,
        })?;

        let mut posts = Vec::new();
        let mut seen: HashSet<(Locale, String)> = HashSet::new();

        let walker = WalkDir::new(&self.content_dir)
            .follow_links(true)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_descend(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable content entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_post_file(path) {
                continue;
            }

            let locale = match self.locale_for(path) {
                Some(locale) => locale,
                None => continue,
            };

            match self.load_post(path, locale) {
                Ok(post) => {
                    if seen.insert((post.locale, post.slug.clone())) {
                        tracing::debug!("Loaded post {} [{}]", post.slug, post.locale);
                        posts.push(post);
                    } else {
                        tracing::warn!(
                            "Skipping {:?}: slug {} already exists for locale {}",
                            path,
                            post.slug,
                            post.locale
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path, locale: Locale) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let source = path.strip_prefix(&self.content_dir).unwrap_or(path);
        parse_entry(source, locale, &content)
    }

    /// Skip hidden entries and top-level directories that are not locales
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }
        if entry.depth() == 1 && entry.file_type().is_dir() && name.parse::<Locale>().is_err() {
            tracing::warn!("Skipping directory {:?}: not a supported locale", entry.path());
            return false;
        }
        true
    }

    fn locale_for(&self, path: &Path) -> Option<Locale> {
        let relative = path.strip_prefix(&self.content_dir).ok()?;
        let mut components = relative.components();
        let first = components.next()?;
        if components.next().is_none() {
            return Some(self.default_locale);
        }
        first.as_os_str().to_str()?.parse().ok()
    }
}

/// Validate one content entry into a post.
///
/// `source` is the path relative to the content directory; its file stem
/// provides the slug.
pub fn parse_entry(source: &Path, locale: Locale, content: &str) -> Result<Post, ContentError> {
    let (meta, body) =
        PostMetadata::parse(content).map_err(|e| ContentError::invalid(source, e.to_string()))?;

    let slug = source
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(slug_from_stem)
        .ok_or_else(|| ContentError::invalid(source, "file name has no slug"))?;

    let title = non_blank(meta.title.as_deref())
        .ok_or_else(|| ContentError::invalid(source, "missing title"))?;

    let publish_date = match meta.publish_date.as_deref() {
        None => return Err(ContentError::invalid(source, "missing publishDate")),
        Some(raw) => meta.parse_publish_date().ok_or_else(|| {
            ContentError::invalid(source, format!("invalid publishDate {:?}", raw))
        })?,
    };

    let mut post = Post::new(&slug, locale, &title, publish_date);
    post.description = non_blank(meta.description.as_deref());
    post.category = non_blank(meta.category.as_deref());
    post.cover_image = non_blank(meta.cover_image.as_deref());
    post.body = body.to_string();
    post.source = source.to_path_buf();

    Ok(post)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
