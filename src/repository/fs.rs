//! Filesystem-backed repository

use std::path::PathBuf;

use super::{find_post, visible_posts, PostRepository};
use crate::content::{ContentError, ContentLoader, Post};
use crate::i18n::Locale;

/// Reads the content directory fresh on every call
pub struct FsRepository {
    loader: ContentLoader,
}

impl FsRepository {
    pub fn new<P: Into<PathBuf>>(content_dir: P, default_locale: Locale) -> Self {
        Self {
            loader: ContentLoader::new(content_dir, default_locale),
        }
    }
}

impl PostRepository for FsRepository {
    fn list_posts(&self, locale: Locale) -> Result<Vec<Post>, ContentError> {
        let posts = self.loader.load_posts()?;
        Ok(visible_posts(posts, locale, self.loader.default_locale()))
    }

    fn get_post(&self, locale: Locale, slug: &str) -> Result<Post, ContentError> {
        let posts = self.loader.load_posts()?;
        find_post(&posts, locale, self.loader.default_locale(), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &std::path::Path, name: &str, title: &str, date: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let content = format!(
            "export const metadata = {{\n    title: \"{}\",\n    publishDate: \"{}\",\n}};\n\nBody\n",
            title, date
        );
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_locale_fallback_scenario() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "240101-hello-world.mdx", "Hello world", "2024-01-01");
        write_post(tmp.path(), "vi/240102-hello-world.mdx", "Xin chào thế giới", "2024-01-02");

        let repo = FsRepository::new(tmp.path(), Locale::En);

        let vi = repo.list_posts(Locale::Vi).unwrap();
        assert_eq!(vi.len(), 1);
        assert_eq!(vi[0].publish_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let zh = repo.list_posts(Locale::Zh).unwrap();
        assert_eq!(zh.len(), 1);
        assert_eq!(zh[0].locale, Locale::En);
        assert_eq!(zh[0].publish_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let post = repo.get_post(Locale::Zh, "hello-world").unwrap();
        assert_eq!(post.title, "Hello world");
        let post = repo.get_post(Locale::Vi, "hello-world").unwrap();
        assert_eq!(post.title, "Xin chào thế giới");
    }

    #[test]
    fn test_incomplete_entries_never_listed() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "240101-ok.mdx", "Ok", "2024-01-01");
        fs::write(
            tmp.path().join("240102-no-date.mdx"),
            "export const metadata = {\n    title: \"No date\",\n};\n",
        )
        .unwrap();
        fs::create_dir_all(tmp.path().join("vi")).unwrap();
        fs::write(
            tmp.path().join("vi/240103-no-title.mdx"),
            "export const metadata = {\n    publishDate: \"2024-01-03\",\n};\n",
        )
        .unwrap();

        let repo = FsRepository::new(tmp.path(), Locale::En);
        for locale in Locale::ALL {
            let slugs: Vec<_> = repo
                .list_posts(locale)
                .unwrap()
                .into_iter()
                .map(|p| p.slug)
                .collect();
            assert_eq!(slugs, vec!["ok".to_string()]);
        }
        assert!(repo.get_post(Locale::En, "no-date").unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_and_unreadable() {
        let tmp = TempDir::new().unwrap();
        let repo = FsRepository::new(tmp.path(), Locale::En);
        assert!(repo.list_posts(Locale::En).unwrap().is_empty());
        assert!(repo.get_post(Locale::En, "anything").unwrap_err().is_not_found());

        let repo = FsRepository::new(tmp.path().join("missing"), Locale::En);
        let err = repo.list_posts(Locale::En).unwrap_err();
        assert!(matches!(err, ContentError::Unreadable { .. }));
        assert!(!err.is_not_found());
    }
}
