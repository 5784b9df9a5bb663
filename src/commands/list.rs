//! List posts for a locale

use anyhow::Result;
use std::fmt::Write;

use crate::content::Post;
use crate::i18n::Locale;
use crate::repository::PostRepository;
use crate::Site;

/// Print the listing for `locale` (the default locale when absent)
pub fn run(site: &Site, locale: Option<Locale>, json: bool) -> Result<()> {
    let locale = locale.unwrap_or(site.config.default_locale);
    let posts = site.repository().list_posts(locale)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        print!("{}", format_listing(&posts, locale));
    }

    Ok(())
}

/// Human readable listing. Fallback entries are marked with their language.
pub fn format_listing(posts: &[Post], locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Posts [{}] ({}):", locale, posts.len());
    for post in posts {
        let _ = write!(
            out,
            "  {} - {} [{}]",
            post.publish_date.format("%Y-%m-%d"),
            post.title,
            post.slug
        );
        if post.locale != locale {
            let _ = write!(out, " ({})", post.locale.name());
        }
        if let Some(category) = &post.category {
            let _ = write!(out, " #{}", category);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_listing() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let mut translated = Post::new("hello-world", Locale::Vi, "Xin chào", date);
        translated.category = Some("General".to_string());
        let fallback = Post::new(
            "only-en",
            Locale::En,
            "Only English",
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
        );

        let listing = format_listing(&[translated, fallback], Locale::Vi);
        assert_eq!(
            listing,
            "Posts [vi] (2):\n  2024-01-02 - Xin chào [hello-world] #General\n  2023-12-01 - Only English [only-en] (English)\n"
        );
    }

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(format_listing(&[], Locale::En), "Posts [en] (0):\n");
    }
}
