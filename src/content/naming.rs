//! Slugs and content file names

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// Extensions recognised as post files
pub const POST_EXTENSIONS: [&str; 3] = ["mdx", "md", "markdown"];

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref DATE_PREFIX: Regex =
        Regex::new(r"^(\d{4}-\d{2}-\d{2}|\d{8}|\d{6})-(.+)$").unwrap();
}

/// Turn a title into a URL-safe slug.
///
/// Punctuation is dropped rather than turned into a separator, so
/// `"What's new?"` becomes `whats-new`.
pub fn slugify(title: &str) -> String {
    slug::slugify(PUNCTUATION.replace_all(title, ""))
}

/// Check if a file is a post file. Extensions match case-insensitively.
pub fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| POST_EXTENSIONS.iter().any(|ext| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Derive the slug from a file stem, stripping a leading date prefix
/// (`yymmdd-`, `yyyymmdd-` or `yyyy-mm-dd-`). A prefix that is not a real
/// date stays part of the slug.
pub fn slug_from_stem(stem: &str) -> Option<String> {
    let slug = match DATE_PREFIX.captures(stem) {
        Some(caps) if parse_date_prefix(&caps[1]).is_some() => caps[2].to_string(),
        _ => stem.to_string(),
    };
    let slug = slug.trim_matches('-');
    (!slug.is_empty()).then(|| slug.to_string())
}

fn parse_date_prefix(prefix: &str) -> Option<NaiveDate> {
    let fmt = match prefix.len() {
        6 => "%y%m%d",
        8 => "%Y%m%d",
        _ => "%Y-%m-%d",
    };
    NaiveDate::parse_from_str(prefix, fmt).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My First Post"), "my-first-post");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("  Rust_and --  Wasm  "), "rust-and-wasm");
        assert_eq!(slugify("Xin chào"), "xin-chao");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slug_from_stem() {
        assert_eq!(slug_from_stem("240101-hello-world").as_deref(), Some("hello-world"));
        assert_eq!(slug_from_stem("20240101-hello-world").as_deref(), Some("hello-world"));
        assert_eq!(slug_from_stem("2024-01-01-hello-world").as_deref(), Some("hello-world"));
        assert_eq!(slug_from_stem("hello-world").as_deref(), Some("hello-world"));
        // Not a date, so the digits belong to the slug
        assert_eq!(slug_from_stem("999999-things").as_deref(), Some("999999-things"));
        assert_eq!(slug_from_stem("-"), None);
    }

    #[test]
    fn test_is_post_file() {
        assert!(is_post_file(Path::new("a/240101-x.mdx")));
        assert!(is_post_file(Path::new("x.md")));
        assert!(is_post_file(Path::new("Post.MDX")));
        assert!(is_post_file(Path::new("x.Markdown")));
        assert!(!is_post_file(Path::new("cover.png")));
        assert!(!is_post_file(Path::new("README")));
    }
}
