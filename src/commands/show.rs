//! Show a single post

use anyhow::Result;
use std::fmt::Write;

use crate::content::Post;
use crate::i18n::Locale;
use crate::repository::PostRepository;
use crate::Site;

/// Print the post for `slug`. A missing post surfaces as
/// [`crate::ContentError::NotFound`] inside the returned error.
pub fn run(site: &Site, locale: Option<Locale>, slug: &str) -> Result<()> {
    let locale = locale.unwrap_or(site.config.default_locale);
    let post = site.repository().get_post(locale, slug)?;
    print!("{}", render_post(&post));
    Ok(())
}

/// Metadata summary followed by the raw body
pub fn render_post(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "  slug:     {}", post.slug);
    let _ = writeln!(out, "  locale:   {}", post.locale);
    let _ = writeln!(out, "  date:     {}", post.publish_date.format("%Y-%m-%d"));
    if let Some(description) = &post.description {
        let _ = writeln!(out, "  summary:  {}", description);
    }
    if let Some(category) = &post.category {
        let _ = writeln!(out, "  category: {}", category);
    }
    if let Some(cover) = &post.cover_image {
        let _ = writeln!(out, "  cover:    {}", cover);
    }
    let _ = writeln!(out, "  source:   {}", post.source.display());
    out.push('\n');
    out.push_str(&post.body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_render_post() {
        let mut post = Post::new(
            "hello-world",
            Locale::En,
            "Hello",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        post.category = Some("General".to_string());
        post.body = "## Hi\n".to_string();

        let out = render_post(&post);
        assert!(out.starts_with("Hello\n  slug:     hello-world\n"));
        assert!(out.contains("  category: General\n"));
        assert!(!out.contains("summary"));
        assert!(out.ends_with("\n## Hi\n"));
    }

    #[test]
    fn test_missing_post_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        std::fs::create_dir_all(&site.content_dir).unwrap();

        let err = run(&site, None, "nope").unwrap_err();
        let content_err = err.downcast_ref::<ContentError>().unwrap();
        assert!(content_err.is_not_found());
    }
}
