//! Revalidating cache for post listings
//!
//! The readers themselves read fresh on every call. Callers that serve many
//! requests wrap a reader in [`RevalidatingRepository`] to reuse a locale's
//! listing until its revalidation window passes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::content::{ContentError, Post};
use crate::i18n::Locale;
use crate::repository::PostRepository;

/// A cached listing for one locale
#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    posts: Arc<Vec<Post>>,
}

/// Caches each locale's listing for a fixed window.
///
/// `get_post` is answered from the cached listing, which already holds exactly
/// one visible entry per slug. Errors are never cached.
pub struct RevalidatingRepository<R> {
    inner: R,
    window: Duration,
    entries: Mutex<HashMap<Locale, CacheEntry>>,
}

impl<R: PostRepository> RevalidatingRepository<R> {
    pub fn new(inner: R, window: Duration) -> Self {
        Self {
            inner,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Drop every cached listing
    pub fn invalidate(&self) {
        self.lock().clear();
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn listing(&self, locale: Locale) -> Result<Arc<Vec<Post>>, ContentError> {
        if let Some(entry) = self.lock().get(&locale) {
            if entry.fetched_at.elapsed() < self.window {
                return Ok(entry.posts.clone());
            }
        }

        // Fetch outside the lock; concurrent misses may both read, last one wins
        let posts = Arc::new(self.inner.list_posts(locale)?);
        tracing::debug!("Refreshed {} posts for locale {}", posts.len(), locale);
        self.lock().insert(
            locale,
            CacheEntry {
                fetched_at: Instant::now(),
                posts: posts.clone(),
            },
        );
        Ok(posts)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Locale, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<R: PostRepository> PostRepository for RevalidatingRepository<R> {
    fn list_posts(&self, locale: Locale) -> Result<Vec<Post>, ContentError> {
        Ok(self.listing(locale)?.as_ref().clone())
    }

    fn get_post(&self, locale: Locale, slug: &str) -> Result<Post, ContentError> {
        self.listing(locale)?
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                locale,
                slug: slug.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the wrapped repository is asked for a listing
    struct Counting {
        inner: MemoryRepository,
        calls: AtomicUsize,
    }

    impl PostRepository for Counting {
        fn list_posts(&self, locale: Locale) -> Result<Vec<Post>, ContentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_posts(locale)
        }

        fn get_post(&self, locale: Locale, slug: &str) -> Result<Post, ContentError> {
            self.inner.get_post(locale, slug)
        }
    }

    fn counting() -> Counting {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let posts = vec![
            Post::new("hello-world", Locale::En, "Hello", date),
            Post::new("hello-world", Locale::Vi, "Xin chào", date),
        ];
        Counting {
            inner: MemoryRepository::with_posts(Locale::En, posts),
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_listing_cached_within_window() {
        let repo = RevalidatingRepository::new(counting(), Duration::from_secs(3600));

        assert_eq!(repo.list_posts(Locale::Vi).unwrap().len(), 1);
        assert_eq!(repo.get_post(Locale::Vi, "hello-world").unwrap().title, "Xin chào");
        assert_eq!(repo.inner().calls.load(Ordering::SeqCst), 1);

        // Each locale has its own entry
        assert_eq!(repo.get_post(Locale::Zh, "hello-world").unwrap().title, "Hello");
        assert_eq!(repo.inner().calls.load(Ordering::SeqCst), 2);

        repo.invalidate();
        repo.list_posts(Locale::Vi).unwrap();
        assert_eq!(repo.inner().calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_zero_window_always_refetches() {
        let repo = RevalidatingRepository::new(counting(), Duration::ZERO);
        repo.list_posts(Locale::En).unwrap();
        repo.list_posts(Locale::En).unwrap();
        assert_eq!(repo.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_not_found_from_cache() {
        let repo = RevalidatingRepository::new(counting(), Duration::from_secs(60));
        let err = repo.get_post(Locale::En, "missing").unwrap_err();
        assert!(err.is_not_found());
    }
}
