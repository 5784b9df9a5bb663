//! In-memory repository

use super::{find_post, visible_posts, PostRepository};
use crate::content::{ContentError, Post};
use crate::i18n::Locale;

/// Holds posts in memory. Useful for tests and for callers that load
/// content from somewhere other than the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    default_locale: Locale,
    posts: Vec<Post>,
}

impl MemoryRepository {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            posts: Vec::new(),
        }
    }

    /// Build from a set of posts; a later post replaces an earlier one with
    /// the same slug and locale
    pub fn with_posts<I: IntoIterator<Item = Post>>(default_locale: Locale, posts: I) -> Self {
        let mut repo = Self::new(default_locale);
        for post in posts {
            repo.insert(post);
        }
        repo
    }

    /// Add a post, returning the one it replaced
    pub fn insert(&mut self, post: Post) -> Option<Post> {
        match self
            .posts
            .iter_mut()
            .find(|p| p.locale == post.locale && p.slug == post.slug)
        {
            Some(existing) => Some(std::mem::replace(existing, post)),
            None => {
                self.posts.push(post);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostRepository for MemoryRepository {
    fn list_posts(&self, locale: Locale) -> Result<Vec<Post>, ContentError> {
        Ok(visible_posts(self.posts.clone(), locale, self.default_locale))
    }

    fn get_post(&self, locale: Locale, slug: &str) -> Result<Post, ContentError> {
        find_post(&self.posts, locale, self.default_locale, slug)
    }
}
