//! Locale-aware post repositories
//!
//! A repository answers two questions for the presentation layer: which posts
//! are visible in a locale, and which post a slug resolves to. Both follow the
//! same fallback rule: an entry in the requested locale wins, otherwise the
//! default-locale entry for the same slug is used.

mod fs;
mod memory;

use std::collections::HashSet;

pub use fs::FsRepository;
pub use memory::MemoryRepository;

use crate::content::{ContentError, Post};
use crate::i18n::Locale;

/// Read-only access to the post collection
pub trait PostRepository {
    /// Posts visible in `locale`, newest first, ties broken by slug
    fn list_posts(&self, locale: Locale) -> Result<Vec<Post>, ContentError>;

    /// The post for `slug` in `locale`, falling back to the default locale.
    /// Returns [`ContentError::NotFound`] when neither exists.
    fn get_post(&self, locale: Locale, slug: &str) -> Result<Post, ContentError>;
}

/// Filter a full post collection down to what `locale` sees and sort it
pub fn visible_posts(posts: Vec<Post>, locale: Locale, default_locale: Locale) -> Vec<Post> {
    let translated: HashSet<String> = posts
        .iter()
        .filter(|p| p.locale == locale)
        .map(|p| p.slug.clone())
        .collect();

    let mut visible: Vec<Post> = posts
        .into_iter()
        .filter(|p| {
            p.locale == locale || (p.locale == default_locale && !translated.contains(&p.slug))
        })
        .collect();

    sort_posts(&mut visible);
    visible
}

/// Sort by publish date descending, then slug ascending
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.publish_date
            .cmp(&a.publish_date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Resolve a slug in `locale`, falling back to `default_locale`
pub fn find_post(
    posts: &[Post],
    locale: Locale,
    default_locale: Locale,
    slug: &str,
) -> Result<Post, ContentError> {
    let in_locale = |l: Locale| posts.iter().find(|p| p.locale == l && p.slug == slug);

    in_locale(locale)
        .or_else(|| in_locale(default_locale))
        .cloned()
        .ok_or_else(|| ContentError::NotFound {
            locale,
            slug: slug.to_string(),
        })
}
